use crate::error::BuildError;
use crate::models::Gallery;
use log::{debug, info};
use reqwest::Client;
use std::fs;
use std::path::Path;
use url::Url;

/// Downloads `urls` in order into a new `dest_dir` as `img0..imgN-1` and
/// writes an `index.html` showing them.
///
/// `dest_dir` must not exist yet. The first failed fetch aborts the build and
/// leaves the images written so far in place, without an index.
pub async fn build(urls: &[String], dest_dir: &Path) -> Result<Gallery, BuildError> {
    if dest_dir.exists() {
        return Err(BuildError::DirectoryExists(dest_dir.to_path_buf()));
    }

    debug!("Creating {}", dest_dir.display());
    fs::create_dir(dest_dir).map_err(|source| match source.kind() {
        std::io::ErrorKind::AlreadyExists => BuildError::DirectoryExists(dest_dir.to_path_buf()),
        _ => BuildError::CreateDir {
            path: dest_dir.to_path_buf(),
            source,
        },
    })?;

    let client = Client::new();
    let mut gallery = Gallery::new(dest_dir);

    for url in urls {
        let path = gallery.next_image_path();
        fetch_image(&client, url, &path).await?;
        gallery.add_image();
    }

    let index = gallery.write_index().map_err(|source| BuildError::Write {
        path: dest_dir.join(crate::models::gallery::INDEX_NAME),
        source,
    })?;
    info!("Wrote {} images and {}", gallery.len(), index.display());

    Ok(gallery)
}

/// Fetches one image and stores the body at `path` as-is.
pub async fn fetch_image(client: &Client, url: &str, path: &Path) -> Result<(), BuildError> {
    let parsed = Url::parse(url).map_err(|source| BuildError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    info!("Retrieving {}", url);
    let transfer = |source| BuildError::Transfer {
        url: url.to_string(),
        source,
    };
    let res = client
        .get(parsed)
        .send()
        .await
        .and_then(|res| res.error_for_status())
        .map_err(transfer)?;
    let bytes = res.bytes().await.map_err(transfer)?;

    debug!("Writing {} bytes to {}", bytes.len(), path.display());
    fs::write(path, &bytes).map_err(|source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    })
}
