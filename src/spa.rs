use std::path::PathBuf;

use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};

/// Static asset tree with an SPA fallback: any unmatched path gets the
/// front-end entry file so client-side routing can take over.
pub fn service(static_dir: impl Into<PathBuf>) -> Files {
    let dir = static_dir.into();
    let index = dir.join("index.html");

    Files::new("/", dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(&index).await?;
                let res = file.into_response(&req);
                Ok(ServiceResponse::new(req, res))
            }
        }))
}
