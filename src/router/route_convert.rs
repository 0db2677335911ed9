use futures::{pin_mut, Stream, StreamExt};
use warp::hyper::body::Buf;
use warp::hyper::header::CONTENT_DISPOSITION;
use warp::{Filter, Rejection, Reply};

use crate::app_error::ServerError;
use crate::config::AppConfig;
use crate::convert::decode::decode_audio;
use crate::convert::persist::persist_audio;
use crate::convert::request::ConversionRequest;

use super::custom_reply::CustomReply;
use super::error_reply::ErrorReply;
use super::routes::with_data;

/// Collects the request body, counting the bytes actually received so
/// chunked uploads are capped the same way as sized ones.
pub async fn read_body<S, B>(body: S, limit: u64) -> Result<Vec<u8>, ServerError>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    pin_mut!(body);
    let mut buf = Vec::new();
    while let Some(chunk) = body.next().await {
        let mut chunk = chunk.map_err(ServerError::BodyReadError)?;
        if (buf.len() + chunk.remaining()) as u64 > limit {
            return Err(ServerError::PayloadTooLarge);
        }
        while chunk.has_remaining() {
            let bytes = chunk.chunk();
            let len = bytes.len();
            buf.extend_from_slice(bytes);
            chunk.advance(len);
        }
    }
    Ok(buf)
}

#[tracing::instrument(name = "convert_mp3", skip(config, body))]
async fn get_convert_reply<S, B>(
    content_length: Option<u64>,
    config: AppConfig,
    body: S,
) -> Result<CustomReply, ServerError>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    if content_length.map_or(false, |len| len > config.max_body_bytes) {
        return Err(ServerError::PayloadTooLarge);
    }
    let body = read_body(body, config.max_body_bytes).await?;

    let request = ConversionRequest::from_body(&body)?;
    let audio = decode_audio(&request.base64_data)?;

    if config.persist_output {
        let file_path = persist_audio(&config.output_dir, &request.filename, &audio).await?;
        tracing::info!(path = %file_path.display(), "Wrote decoded audio");
    }

    let mut reply = CustomReply::bytes(audio, "audio/mpeg");
    reply.add_header(
        CONTENT_DISPOSITION,
        request.filename.content_disposition().as_str(),
    )?;
    Ok(reply)
}

pub async fn convert_route_handler<S, B>(
    content_length: Option<u64>,
    config: AppConfig,
    body: S,
) -> Result<impl Reply, Rejection>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    match get_convert_reply(content_length, config, body).await {
        Ok(reply) => Ok(reply),
        Err(err) => Ok(ErrorReply::from(err).as_reply()),
    }
}

pub fn convert_route(
    config: AppConfig,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path!("convert-mp3")
        .and(warp::post())
        .and(warp::header::optional::<u64>("content-length"))
        .and(with_data(config))
        .and(warp::body::stream())
        .and_then(convert_route_handler)
}
