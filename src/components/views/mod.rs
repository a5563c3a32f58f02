mod about;
mod album_detail;
mod album_song_row;
mod albums;
pub mod view_models;

pub use about::AboutSection;
pub use album_detail::AlbumDetailView;
pub use albums::AlbumsView;
