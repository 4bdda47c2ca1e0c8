//! Image domain — list, remove.

use super::client::{image_error, DockerClient, DockerError};
use super::inventory::{ImageInfo, RemovalEntry};

use bollard::query_parameters::{ListImagesOptions, RemoveImageOptions};

impl DockerClient {
    /// List top-level images on the Docker host.
    pub async fn list_images(&self) -> Result<Vec<ImageInfo>, DockerError> {
        let options = Some(ListImagesOptions {
            all: false,
            ..Default::default()
        });

        let images = self.client.list_images(options).await?;
        Ok(images.into_iter().map(ImageInfo::from).collect())
    }

    /// Remove an image by ID. Neither forced nor pruning-disabled, so the
    /// daemon refuses images still in use and cleans up dangling parents.
    pub async fn remove_image(&self, image_id: &str) -> Result<Vec<RemovalEntry>, DockerError> {
        let options = Some(RemoveImageOptions {
            force: false,
            noprune: false,
            ..Default::default()
        });

        let items = self
            .client
            .remove_image(image_id, options, None)
            .await
            .map_err(|e| image_error(image_id, e))?;

        Ok(items.into_iter().flat_map(RemovalEntry::from_item).collect())
    }
}
