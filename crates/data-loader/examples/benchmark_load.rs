use data_loader::RatingsTable;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/cleaned_movie_ratings.csv");

    println!("Loading ratings from {}...\n", path.display());

    let start = Instant::now();
    let table = RatingsTable::load_from_file(path)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Ratings: {}", table.len());
    println!("Genres: {}", table.genres().len());
    println!("Release years: {}", table.observed_years().len());
    println!("\nPerformance: {:.0} ratings/second",
             table.len() as f64 / elapsed.as_secs_f64());
}
