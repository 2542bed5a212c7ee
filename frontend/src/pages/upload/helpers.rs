use base64::{engine::general_purpose, Engine as _};
use gloo_file::{futures::read_as_bytes, Blob};
use web_sys::File;

/// Reads the file into a `data:` URL for the local preview. `None` when the
/// browser refuses to read it.
pub async fn read_data_url(file: File) -> Option<String> {
    let mime = match file.type_() {
        mime if mime.is_empty() => "application/octet-stream".to_string(),
        mime => mime,
    };
    let blob = Blob::from(file);
    match read_as_bytes(&blob).await {
        Ok(bytes) => Some(format!(
            "data:{};base64,{}",
            mime,
            general_purpose::STANDARD.encode(&bytes)
        )),
        Err(err) => {
            log::warn!("could not read selected image: {}", err);
            None
        }
    }
}
