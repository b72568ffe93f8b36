use crate::models::Movie;

/// Builds the searchable document for a movie
///
/// Every genre, cast member, director and keyword becomes a single token, so
/// "Science Fiction" and "Leonardo DiCaprio" are matched as whole values
/// rather than as loose words. Tokens are lowercase and alphanumeric only.
pub fn compose(movie: &Movie) -> String {
    let director = std::iter::once(movie.director.as_str());

    movie
        .genres
        .iter()
        .map(String::as_str)
        .chain(movie.cast.iter().map(String::as_str))
        .chain(director)
        .chain(movie.keywords.iter().map(String::as_str))
        .map(to_token)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Composes documents for every movie, preserving row order
pub fn compose_all(movies: &[Movie]) -> Vec<String> {
    movies.iter().map(compose).collect()
}

fn to_token(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_orders_and_joins_features() {
        let movie = Movie::new("Inception")
            .with_genres(["Action", "Science Fiction"])
            .with_cast(["Leonardo DiCaprio", "Joseph Gordon-Levitt"])
            .with_director("Christopher Nolan")
            .with_keywords(["dream", "heist"]);

        assert_eq!(
            compose(&movie),
            "action sciencefiction leonardodicaprio josephgordonlevitt christophernolan dream heist"
        );
    }

    #[test]
    fn test_compose_strips_punctuation() {
        let movie = Movie::new("X").with_cast(["Robert Downey, Jr.", "O'Neal"]);
        assert_eq!(compose(&movie), "robertdowneyjr oneal");
    }

    #[test]
    fn test_compose_empty_movie_is_empty_document() {
        assert_eq!(compose(&Movie::new("Nothing")), "");
        let punctuation_only = Movie::new("Dots").with_keywords(["...", "--"]);
        assert_eq!(compose(&punctuation_only), "");
    }

    #[test]
    fn test_compose_keeps_non_ascii_letters() {
        let movie = Movie::new("Amélie").with_director("Jean-Pierre Jeunet").with_genres(["Comédie"]);
        assert_eq!(compose(&movie), "comédie jeanpierrejeunet");
    }

    #[test]
    fn test_compose_all_preserves_order() {
        let movies = vec![
            Movie::new("A").with_genres(["Action"]),
            Movie::new("B").with_genres(["Drama"]),
        ];
        assert_eq!(compose_all(&movies), vec!["action", "drama"]);
    }
}
