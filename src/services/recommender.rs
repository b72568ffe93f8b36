use crate::{
    error::{AppError, AppResult},
    models::Recommendation,
    services::catalog::Catalog,
};

/// Anything that can turn a title into ranked recommendations
///
/// The interactive shell depends on this rather than on [`Recommender`].
#[cfg_attr(test, mockall::automock)]
pub trait Recommend {
    /// Returns up to `top_n` movies most similar to `title`, best first
    fn recommend(&self, title: &str, top_n: usize) -> AppResult<Vec<Recommendation>>;
}

/// Content-based recommender over a prebuilt [`Catalog`]
pub struct Recommender {
    catalog: Catalog,
}

impl Recommender {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Recommend for Recommender {
    /// Ranks every other movie by similarity to `title`
    ///
    /// Lookup is case-insensitive. Equal scores keep dataset order. Asking
    /// for more results than there are other movies returns all of them.
    fn recommend(&self, title: &str, top_n: usize) -> AppResult<Vec<Recommendation>> {
        if top_n == 0 {
            return Err(AppError::InvalidInput(
                "number of recommendations must be at least 1".to_string(),
            ));
        }

        let dataset = self.catalog.dataset();
        let target = dataset.position(title).ok_or_else(|| {
            tracing::error!(title = %title, "Movie not found");
            AppError::TitleNotFound(title.trim().to_string())
        })?;

        let scores = self.catalog.matrix().row(target).ok_or_else(|| {
            AppError::Internal(format!("no similarity row for dataset row {}", target))
        })?;

        let mut ranked: Vec<(usize, f64)> = scores
            .iter()
            .copied()
            .enumerate()
            .filter(|(row, _)| *row != target)
            .collect();
        // stable: ties keep dataset order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(top_n);

        let recommendations: Vec<Recommendation> = ranked
            .into_iter()
            .filter_map(|(row, score)| {
                dataset.get(row).map(|movie| Recommendation {
                    title: movie.title.clone(),
                    score,
                    release_year: movie.release_year,
                })
            })
            .collect();

        tracing::info!(
            title = %title,
            results = ?recommendations.iter().map(|r| r.title.as_str()).collect::<Vec<_>>(),
            "Recommendations computed"
        );

        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, Movie};

    fn recommender(movies: Vec<Movie>) -> Recommender {
        Recommender::new(Catalog::build(Dataset::new(movies)))
    }

    fn abc() -> Recommender {
        recommender(vec![
            Movie::new("A").with_genres(["Action"]),
            Movie::new("B").with_genres(["Action"]),
            Movie::new("C").with_genres(["Drama"]),
        ])
    }

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_recommend_ranks_shared_genre_first() {
        let recs = abc().recommend("A", 2).unwrap();
        assert_eq!(titles(&recs), vec!["B", "C"]);
        assert!(recs[0].score > 0.0);
        assert!(recs[1].score < 1e-9);
        assert!(recs[0].score > recs[1].score);
    }

    #[test]
    fn test_recommend_excludes_query_title() {
        let recs = abc().recommend("B", 5).unwrap();
        assert!(!titles(&recs).contains(&"B"));
    }

    #[test]
    fn test_recommend_unknown_title_fails() {
        match abc().recommend("Nonexistent Movie", 3) {
            Err(AppError::TitleNotFound(title)) => assert_eq!(title, "Nonexistent Movie"),
            other => panic!("expected TitleNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_recommend_top_n_larger_than_candidates() {
        let recs = abc().recommend("A", 10).unwrap();
        assert_eq!(recs.len(), 2);
    }

    #[test]
    fn test_recommend_zero_top_n_rejected() {
        assert!(matches!(
            abc().recommend("A", 0),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_recommend_is_case_insensitive() {
        let recs = abc().recommend("  a ", 1).unwrap();
        assert_eq!(titles(&recs), vec!["B"]);
    }

    #[test]
    fn test_ties_keep_dataset_order() {
        let rec = recommender(vec![
            Movie::new("Query").with_genres(["Western"]),
            Movie::new("First").with_genres(["Noir"]),
            Movie::new("Second").with_genres(["Musical"]),
            Movie::new("Third").with_genres(["Horror"]),
        ]);
        let recs = rec.recommend("Query", 3).unwrap();
        assert_eq!(titles(&recs), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_featureless_movie_gets_zero_scores() {
        let rec = recommender(vec![
            Movie::new("Blank"),
            Movie::new("Heat").with_genres(["Crime"]),
            Movie::new("Ronin").with_genres(["Crime"]),
        ]);
        let recs = rec.recommend("Blank", 2).unwrap();
        assert!(recs.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn test_single_movie_catalog_returns_empty() {
        let rec = recommender(vec![Movie::new("Alone").with_genres(["Drama"])]);
        assert!(rec.recommend("Alone", 5).unwrap().is_empty());
    }

    #[test]
    fn test_cast_and_director_drive_similarity() {
        let rec = recommender(vec![
            Movie::new("Inception")
                .with_genres(["Action", "Adventure"])
                .with_cast(["Leonardo DiCaprio"])
                .with_director("Christopher Nolan")
                .with_keywords(["dream", "spy"]),
            Movie::new("The Matrix")
                .with_genres(["Action", "Science Fiction"])
                .with_cast(["Keanu Reeves"])
                .with_director("Lana Wachowski")
                .with_keywords(["hacker", "future"]),
            Movie::new("Interstellar")
                .with_genres(["Adventure", "Science Fiction"])
                .with_cast(["Matthew McConaughey"])
                .with_director("Christopher Nolan")
                .with_keywords(["space", "dream"]),
            Movie::new("The Godfather")
                .with_genres(["Crime", "Drama"])
                .with_cast(["Marlon Brando"])
                .with_director("Francis Ford Coppola")
                .with_keywords(["mafia", "family"]),
        ]);

        let recs = rec.recommend("Inception", 3).unwrap();
        assert_eq!(titles(&recs), vec!["Interstellar", "The Matrix", "The Godfather"]);
        assert_eq!(recs[2].score, 0.0);
    }
}
