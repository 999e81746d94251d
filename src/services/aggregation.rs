//! Read side: derives the aggregated view of a product from its raw
//! interaction records. Nothing is cached, every read recomputes.

use crate::models;
use crate::views;

/// Mean of all rating values rounded half-up to one decimal, 0.0 without ratings.
///
/// Worked in integer tenths so that means ending exactly in `.x5` round the
/// same way on every platform: {2,2,2,3} averages 2.25 and yields 2.3.
pub fn average_rating(ratings: &[models::Rating]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }

    let sum: i64 = ratings.iter().map(|rating| i64::from(rating.rate)).sum();
    let count = ratings.len() as i64;
    // round(sum * 10 / count) with halves going up, all operands positive
    let tenths = (20 * sum + count) / (2 * count);
    tenths as f64 / 10.0
}

pub fn like_count(likes: &[models::Like]) -> usize {
    likes.len()
}

/// Likers in store order.
pub fn liker_list(likes: &[models::Like]) -> Vec<views::Liker> {
    likes.iter().map(views::Liker::from).collect()
}

pub fn comment_list(comments: Vec<models::Comment>) -> Vec<views::Comment> {
    comments.into_iter().map(Into::into).collect()
}

pub fn build_view(
    product: models::Product,
    comments: Vec<models::Comment>,
    ratings: &[models::Rating],
    likes: &[models::Like],
) -> views::AggregatedProductView {
    views::AggregatedProductView {
        slug: product.slug,
        user: product.username,
        title: product.title,
        description: product.description,
        image: product.image,
        created_at: product.created_at,
        updated_at: product.updated_at,
        average_rating: average_rating(ratings),
        like_count: like_count(likes),
        likers: liker_list(likes),
        comments: comment_list(comments),
    }
}
