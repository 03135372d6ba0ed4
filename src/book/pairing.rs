use crate::portfolio::Photo;

/// Filler image used for the back of the last page of an odd-length album.
pub const PLACEHOLDER_URL: &str =
    "https://images.unsplash.com/photo-1544378730-8b7791443729?q=80&w=1000&auto=format&fit=crop";
pub const PLACEHOLDER_CAPTION: &str = "End";
const PLACEHOLDER_PREFIX: &str = "placeholder-";

/// One two-sided page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub front: Photo,
    pub back: Photo,
    /// `back` is synthesized filler, not a photo of the album.
    pub placeholder_back: bool,
}

/// Build the filler photo for an album of `album_len` photos.
///
/// The id only depends on the album length, so repeated pairing of the same
/// album yields the same placeholder.
pub fn placeholder(album_len: usize) -> Photo {
    Photo {
        id: format!("{PLACEHOLDER_PREFIX}{album_len}"),
        url: PLACEHOLDER_URL.to_string(),
        caption: PLACEHOLDER_CAPTION.to_string(),
        date: String::new(),
    }
}

/// Group `photos` into consecutive front/back pages: (0,1), (2,3), ...
///
/// An odd-length album gets one placeholder appended so the last page has a
/// back. An empty album yields no pages.
pub fn pair(photos: &[Photo]) -> Vec<Pair> {
    let mut pairs = Vec::with_capacity(photos.len().div_ceil(2));
    let mut chunks = photos.chunks_exact(2);
    for chunk in chunks.by_ref() {
        pairs.push(Pair {
            front: chunk[0].clone(),
            back: chunk[1].clone(),
            placeholder_back: false,
        });
    }
    if let [last] = chunks.remainder() {
        pairs.push(Pair {
            front: last.clone(),
            back: placeholder(photos.len()),
            placeholder_back: true,
        });
    }
    pairs
}
