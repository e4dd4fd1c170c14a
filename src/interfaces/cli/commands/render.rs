//! Plain-text rendering of page regions

use crate::page::format::like_count_label;
use crate::page::{ProductItemView, SlideView};

/// Lines of one slide: name, price, likes, image.
pub fn slide_lines(slide: &SlideView) -> Vec<String> {
    vec![
        slide.name.clone(),
        slide.price.clone(),
        format!("♥ {}", slide.likes),
        format!("image: {}", slide.image),
    ]
}

/// Lines of one product item.
pub fn product_item_lines(item: &ProductItemView) -> Vec<String> {
    let likes = format!("♥ {}", like_count_label(&item.like_count));
    vec![
        format!("{} [{}]", item.name, item.product_id),
        item.description.clone(),
        item.price.clone(),
        likes,
        format!("image: {}", item.image),
    ]
}
