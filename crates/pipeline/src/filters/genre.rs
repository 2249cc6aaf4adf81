//! Filter on genre.

use crate::filter_spec::Selection;
use crate::traits::Filter;
use data_loader::{GenreId, RatingRecord};

/// Keeps rows of the selected genre; `All` keeps everything.
pub struct GenreFilter {
    genre: Selection<GenreId>,
}

impl GenreFilter {
    pub fn new(genre: Selection<GenreId>) -> Self {
        Self { genre }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a RatingRecord>) -> Vec<&'a RatingRecord> {
        match self.genre {
            Selection::All => rows,
            Selection::Only(genre) => rows.into_iter().filter(|r| r.genre == genre).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn test_genre_filter() {
        let rows = vec![
            record("1", "A", 0, 2000, 5.0),
            record("2", "B", 1, 2000, 6.0),
            record("3", "C", 1, 2000, 7.0),
        ];
        let refs: Vec<&RatingRecord> = rows.iter().collect();

        let kept = GenreFilter::new(Selection::Only(GenreId(1))).apply(refs.clone());
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].title, "B");

        let kept = GenreFilter::new(Selection::All).apply(refs.clone());
        assert_eq!(kept.len(), 3);

        // an id the table never issued matches nothing
        let kept = GenreFilter::new(Selection::Only(GenreId(42))).apply(refs);
        assert!(kept.is_empty());
    }
}
