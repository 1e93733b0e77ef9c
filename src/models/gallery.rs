use std::fs;
use std::path::{Path, PathBuf};

pub const INDEX_NAME: &str = "index.html";

pub const INDEX_TEMPLATE: &str = "
<html>
<head>
</head>
<body>
{images}
</body>
</html>
";

/// A destination directory and the images stored in it so far, in order.
#[derive(Debug)]
pub struct Gallery {
    dir: PathBuf,
    images: Vec<String>,
}

impl Gallery {
    pub fn new(dir: &Path) -> Self {
        Gallery {
            dir: dir.to_path_buf(),
            images: Vec::new(),
        }
    }

    /// Path for the next image, `img0`, `img1`, ...
    pub fn next_image_path(&self) -> PathBuf {
        self.dir.join(image_name(self.images.len()))
    }

    /// Records that the image at `next_image_path` has been written.
    pub fn add_image(&mut self) {
        self.images.push(image_name(self.images.len()));
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn index_html(&self) -> String {
        let tags: Vec<String> = self.images.iter().map(|name| img_tag(name)).collect();
        INDEX_TEMPLATE.replace("{images}", &tags.join("\n"))
    }

    pub fn write_index(&self) -> std::io::Result<PathBuf> {
        let path = self.dir.join(INDEX_NAME);
        fs::write(&path, self.index_html())?;
        Ok(path)
    }
}

pub fn image_name(index: usize) -> String {
    format!("img{}", index)
}

fn img_tag(src: &str) -> String {
    format!("<img src=\"{}\"/>", src)
}
