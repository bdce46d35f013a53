use contracts::domain::a001_feature::icon::{IconSource, PreviewProvider};

/// File picked in the icon input
#[derive(Clone, Debug)]
pub struct IconFile(pub web_sys::File);

impl IconSource for IconFile {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.type_()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

/// Object-URL previews (`blob:` urls) for picked icon files
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPreviews;

impl PreviewProvider for BrowserPreviews {
    type File = IconFile;

    fn acquire(&self, file: &IconFile) -> Result<String, String> {
        web_sys::Url::create_object_url_with_blob(&file.0)
            .map_err(|e| format!("Failed to create object URL: {:?}", e))
    }

    fn release(&self, url: &str) {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            log::warn!("Failed to revoke object URL {}: {:?}", url, e);
        }
    }
}
