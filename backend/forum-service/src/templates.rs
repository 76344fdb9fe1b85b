/// Feed page rendering
///
/// The index template receives `posts` (newest first) and `page` (the
/// requested page number). An empty `posts` list is a normal render.
use crate::models::Post;
use std::path::Path;
use tera::{Context, Tera};

pub const INDEX_TEMPLATE: &str = "index.html";

pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Load `index.html` from `dir`
    pub fn load(dir: &Path) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_template_file(dir.join(INDEX_TEMPLATE), Some(INDEX_TEMPLATE))?;
        Ok(Self { tera })
    }

    /// Build a renderer from an in-memory index template
    pub fn from_source(source: &str) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_TEMPLATE, source)?;
        Ok(Self { tera })
    }

    pub fn render_index(&self, posts: &[Post], page: u64) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("posts", posts);
        context.insert("page", &page);
        self.tera.render(INDEX_TEMPLATE, &context)
    }
}
