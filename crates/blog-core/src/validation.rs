//! Required-field validation for post requests.

use blog_shared::{CreatePostRequest, UpdatePostRequest};

/// Required fields, in the order they are checked and reported.
///
/// `category` is reported before `content`, so error messages read
/// `[title, category, content]` when all three are blank.
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "category", "content"];

/// Anything exposing the three required text fields of a post.
pub trait PostFields {
    fn title(&self) -> &str;
    fn content(&self) -> &str;
    fn category(&self) -> &str;

    /// Look up a required field by name.
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => Some(self.title()),
            "content" => Some(self.content()),
            "category" => Some(self.category()),
            _ => None,
        }
    }
}

/// Return the names of required fields whose trimmed value is empty.
///
/// An empty result means the input is valid.
pub fn empty_fields<T: PostFields + ?Sized>(input: &T) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|name| input.field(name).is_none_or(|value| value.trim().is_empty()))
        .collect()
}

macro_rules! impl_post_fields {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PostFields for $ty {
                fn title(&self) -> &str {
                    &self.title
                }

                fn content(&self) -> &str {
                    &self.content
                }

                fn category(&self) -> &str {
                    &self.category
                }
            }
        )+
    };
}

impl_post_fields!(CreatePostRequest, UpdatePostRequest);
