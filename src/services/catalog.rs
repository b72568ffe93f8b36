use crate::{
    models::Dataset,
    services::{composer, similarity::SimilarityMatrix},
};

/// Dataset paired with its similarity matrix
///
/// Built once at startup and handed to the recommender. Row `i` of the matrix
/// always describes movie `i` of the dataset.
#[derive(Debug, Clone)]
pub struct Catalog {
    dataset: Dataset,
    matrix: SimilarityMatrix,
}

impl Catalog {
    /// Composes a document per movie and builds the similarity matrix
    pub fn build(dataset: Dataset) -> Self {
        let documents = composer::compose_all(dataset.movies());

        let featureless = documents.iter().filter(|doc| doc.is_empty()).count();
        if featureless > 0 {
            tracing::warn!(
                count = featureless,
                "Movies without genres, cast, director or keywords will never be recommended"
            );
        }

        let matrix = SimilarityMatrix::build(&documents);
        Self { dataset, matrix }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }
}
