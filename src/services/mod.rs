pub mod catalog;
pub mod composer;
pub mod loader;
pub mod recommender;
pub mod similarity;

pub use catalog::Catalog;
pub use recommender::{Recommend, Recommender};
pub use similarity::{SimilarityMatrix, TfIdfVectorizer};

#[cfg(test)]
pub use recommender::MockRecommend;
