mod footer;
mod header;
mod layout;

pub use footer::Footer;
pub use header::Header;
pub use layout::Layout;
