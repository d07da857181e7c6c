use chaintable::{AnyTable, Value};
use tracing::Level;

fn main() -> chaintable::Result<()> {
    // RUST_LOG is not consulted, the demo always shows bucket events
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    let mut table = AnyTable::new();

    // "ab" and "ba" sum to the same code and share a bucket
    table.add("ab", 1i64.into());
    table.add("ba", "two".into());
    table.add("cat", 10i64.into());
    table.add("dog", Value::Null);

    println!("ab  -> {:?} (code {})", table.lookup("ab"), table.hash_code("ab"));
    println!("ba  -> {:?} (code {})", table.lookup("ba"), table.hash_code("ba"));
    println!("dog -> {:?}", table.lookup("dog"));
    println!("cow -> {:?}", table.lookup("cow"));

    let cat: Option<i64> = table.lookup_as("cat")?;
    println!("cat as int -> {cat:?}");

    table.remove("ab");
    table.remove("ba");
    println!(
        "after removing ab and ba: {} keys in {} buckets",
        table.len(),
        table.bucket_count()
    );

    if let Err(e) = table.lookup_as::<String>("cat") {
        println!("cat as str -> {e}");
    }

    Ok(())
}
