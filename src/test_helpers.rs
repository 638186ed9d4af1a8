//! Shared test fixtures.

use crate::types::PageImage;
use std::io::Cursor;

/// A real (tiny) PNG so assembled artifacts carry decodable images.
pub fn test_page(index: usize, width: u32, height: u32) -> PageImage {
    let bitmap = image::RgbImage::from_pixel(width, height, image::Rgb([200, 200, 200]));
    let mut png = Vec::new();
    bitmap
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();
    PageImage {
        index,
        width,
        height,
        png,
    }
}

/// `count` uniform 4x5 pages, indexed 0..count.
pub fn test_pages(count: usize) -> Vec<PageImage> {
    (0..count).map(|i| test_page(i, 4, 5)).collect()
}
