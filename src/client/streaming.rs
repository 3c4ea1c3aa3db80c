// SSE 流式解码
use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};
use serde_json::Value;
use std::pin::Pin;
use tracing::debug;

use super::error::ClientError;

pub type EventStream = Pin<Box<dyn Stream<Item = Result<Value, ClientError>> + Send>>;

/// 将按任意边界切块的字节流解码为逐条 JSON 事件。
///
/// 帧格式:按行分割,数据行以 `data: ` 开头,其余为 JSON 或终止标记
/// `[DONE]`。终止标记结束序列且不作为事件产出;解析失败的行视为
/// keep-alive 噪音,跳过不报错。读取中途失败产出一条 Transport 错误
/// 后结束。序列被丢弃(含提前取消)时上游响应体随之释放,连接关闭。
pub fn sse_event_stream(
    mut upstream: Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>>,
) -> EventStream {
    let mut buffer = BytesMut::new();

    let stream = async_stream::stream! {
        'read: while let Some(item) = upstream.next().await {
            match item {
                Ok(bytes) => {
                    debug!("[SSE] received chunk: {} bytes", bytes.len());
                    buffer.extend_from_slice(&bytes);

                    // 只按完整行处理,半行留在缓冲区等下一块
                    while let Some(pos) = buffer.iter().position(|&b| b == b'\n') {
                        let line_raw = buffer.split_to(pos + 1);
                        let Ok(line_str) = std::str::from_utf8(&line_raw) else {
                            continue;
                        };
                        let line = line_str.trim();
                        if line.is_empty() {
                            continue;
                        }

                        if let Some(data) = line.strip_prefix("data: ") {
                            let data = data.trim();
                            if data == "[DONE]" {
                                // 终止标记:立即结束,丢弃缓冲区剩余字节
                                break 'read;
                            }

                            match serde_json::from_str::<Value>(data) {
                                Ok(event) => yield Ok(event),
                                Err(_) => {
                                    debug!("[SSE] skipping non-JSON line: {}", data);
                                }
                            }
                        }
                    }
                }
                Err(e) => {
                    yield Err(ClientError::Transport(e));
                    break 'read;
                }
            }
        }
    };

    Box::pin(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use serde_json::json;

    fn chunks(parts: &[&str]) -> Pin<Box<dyn Stream<Item = Result<Bytes, reqwest::Error>> + Send>> {
        let items: Vec<Result<Bytes, reqwest::Error>> = parts
            .iter()
            .map(|p| Ok(Bytes::from(p.to_string())))
            .collect();
        Box::pin(stream::iter(items))
    }

    #[tokio::test]
    async fn test_line_split_across_reads() {
        // 一行跨两次读取,[DONE] 不产出事件
        let s = chunks(&["data: {\"a\"", ":1}\ndata: [DONE]\n"]);
        let events: Vec<_> = sse_event_stream(s).collect().await;

        assert_eq!(events.len(), 1);
        assert_eq!(*events[0].as_ref().unwrap(), json!({"a": 1}));
    }

    #[tokio::test]
    async fn test_multiple_events_in_one_chunk() {
        let s = chunks(&["data: {\"n\":1}\ndata: {\"n\":2}\n", "data: [DONE]\n"]);
        let events: Vec<_> = sse_event_stream(s).collect().await;

        assert_eq!(events.len(), 2);
        assert_eq!(*events[1].as_ref().unwrap(), json!({"n": 2}));
    }

    #[tokio::test]
    async fn test_malformed_line_is_skipped() {
        let s = chunks(&["data: not-json\n", "data: {\"ok\":true}\n", "data: [DONE]\n"]);
        let events: Vec<_> = sse_event_stream(s).collect().await;

        assert_eq!(events.len(), 1);
        assert_eq!(*events[0].as_ref().unwrap(), json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_done_discards_buffered_remainder() {
        // [DONE] 之后同一块里还有完整数据行,不得再产出
        let s = chunks(&["data: [DONE]\ndata: {\"late\":1}\n"]);
        let events: Vec<_> = sse_event_stream(s).collect().await;

        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_non_data_lines_ignored() {
        // SSE 注释行与事件名行不是数据帧
        let s = chunks(&[": keep-alive\nevent: ping\ndata: {\"x\":1}\n", "data: [DONE]\n"]);
        let events: Vec<_> = sse_event_stream(s).collect().await;

        assert_eq!(events.len(), 1);
    }

    #[tokio::test]
    async fn test_stream_without_done_ends_at_eof() {
        let s = chunks(&["data: {\"x\":1}\n"]);
        let events: Vec<_> = sse_event_stream(s).collect().await;

        assert_eq!(events.len(), 1);
    }
}
