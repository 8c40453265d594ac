// Chunked JSON streaming utilities
use crate::infrastructure::http_response::brotli_compress;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;
use serde::Serialize;

/// Create a chunked streaming response of length-prefixed JSON messages
pub fn chunked_json_stream<S, T>(stream: S, compress: bool) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = T> + Send + 'static,
    T: Serialize + Send + Sync + 'static,
{
    let byte_stream = stream.then(move |msg| async move { serialize_chunk(&msg, compress).await });

    // Chunks are compressed one by one, so no Content-Encoding on the response
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(header::TRANSFER_ENCODING, "chunked")
        .body(Body::from_stream(byte_stream))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Serialize a single message to a chunk: 4-byte big-endian length, then payload
pub async fn serialize_chunk<T: Serialize + Sync>(msg: &T, compress: bool) -> Result<Bytes, std::io::Error> {
    let json = serde_json::to_vec(msg)?;

    let payload = if compress { brotli_compress(json).await? } else { json };

    let mut chunk = BytesMut::with_capacity(4 + payload.len());
    chunk.put_u32(payload.len() as u32);
    chunk.put_slice(&payload);

    Ok(chunk.freeze())
}

/// Stream every value published on a watch channel, starting with the current one
pub fn stream_from_watch<T, V, F>(
    rx: tokio::sync::watch::Receiver<T>,
    to_view: F,
    compress: bool,
) -> impl IntoResponse
where
    T: Clone + Send + Sync + 'static,
    V: Serialize + Send + Sync + 'static,
    F: Fn(&T) -> V + Send + 'static,
{
    let updates = tokio_stream::wrappers::WatchStream::new(rx);
    let stream = async_stream::stream! {
        futures::pin_mut!(updates);
        while let Some(value) = updates.next().await {
            yield to_view(&value);
        }
    };

    match chunked_json_stream(stream, compress) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_chunk_is_length_prefixed() {
        let chunk = serialize_chunk(&serde_json::json!({"ticks": 3}), false).await.unwrap();

        let len = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) as usize;
        assert_eq!(len, chunk.len() - 4);
        assert_eq!(&chunk[4..], br#"{"ticks":3}"#);
    }

    #[tokio::test]
    async fn test_compressed_chunk_length_matches_payload() {
        let chunk = serialize_chunk(&vec!["Traffic Flow"; 32], true).await.unwrap();

        let len = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) as usize;
        assert_eq!(len, chunk.len() - 4);
    }
}
