//! Listing Usage Examples
//!
//! This example walks through the main ways of working with delimited-string
//! lists:
//! - Reading items from a raw string with an inferred delimiter
//! - Editing a list in place
//! - Deriving new lists
//! - Configuring a list with the builder
//! - The string-in, string-out functional API
//!
//! Set `RUST_LOG=listing=trace` to see every mutation logged.
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use listing::functional;
#[cfg(feature = "std")]
use listing::prelude::*;
#[cfg(feature = "std")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "std")]
fn main() -> Result<(), ListingError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "=".repeat(60));
    println!("Listing - Usage Examples");
    println!("{}", "=".repeat(60));
    println!();

    example_1_reading()?;
    example_2_editing()?;
    example_3_deriving()?;
    example_4_builder()?;
    example_5_functional()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Reading
/// Demonstrates delimiter inference and positional reads
fn example_1_reading() -> Result<(), ListingError> {
    println!("Example 1: Reading");
    println!("{}", "-".repeat(60));

    let list = Listing::new("check;out;my;library");
    println!("delimiter: {}", list.delimiter());
    println!("items:     {}", list.len());
    println!("get_at(-1): {:?}", list.get_at(-1));
    println!("contains(\"ib\"): {:?}", list.contains("ib"));

    /* Expected Output:
    delimiter: ;
    items:     4
    get_at(-1): Some("library")
    contains("ib"): Some(3)
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Editing
/// Demonstrates in-place mutations and their error contracts
fn example_2_editing() -> Result<(), ListingError> {
    println!("Example 2: Editing");
    println!("{}", "-".repeat(60));

    let mut list = Listing::new("4,1,2,6,3,8,9");
    list.sort();
    println!("sorted:    {list}");

    list.qualify(0);
    list.swap(0, -1)?;
    println!("qualified: {list}");

    list.set_delimiter('-')?;
    println!("hyphens:   {list}");

    if let Err(err) = list.set_at(42, "x") {
        println!("error:     {err}");
    }

    /* Expected Output:
    sorted:    1,2,3,4,6,8,9
    qualified: 0,1,2,3,4,6,8,9,0
    hyphens:   0-1-2-3-4-6-8-9-0
    error:     Invalid list position: 42 (list has 9 items)
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Deriving
/// Demonstrates derivations and numeric views
fn example_3_deriving() -> Result<(), ListingError> {
    println!("Example 3: Deriving");
    println!("{}", "-".repeat(60));

    let list = Listing::new("1,2,3,2,1,2,4");
    println!("duplicates: {}", list.duplicates());
    println!("tail:       {}", list.slice(-3, None));
    println!("squares:    {}", list.map(|item| item.parse::<u32>().map_or(0, |n| n * n)));
    println!("mean:       {:.3}", list.avg::<f64>().unwrap_or_default());

    /* Expected Output:
    duplicates: 1,2
    tail:       1,2,4
    squares:    1,4,9,4,1,4,16
    mean:       2.143
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Builder
/// Demonstrates configuring a list with the classic delimiter set
fn example_4_builder() -> Result<(), ListingError> {
    println!("Example 4: Builder");
    println!("{}", "-".repeat(60));

    let prices = Listing::builder()
        .items([19.99, 5.5, 12.0])
        .delimiter(';')
        .delimiter_set(Classic)
        .build()?;
    println!("prices: {prices}");
    println!("max:    {:?}", prices.max::<f64>());

    /* Expected Output:
    prices: 19.99;5.5;12
    max:    Some(19.99)
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 5: Functional API
/// Demonstrates free functions over raw strings
fn example_5_functional() -> Result<(), ListingError> {
    println!("Example 5: Functional API");
    println!("{}", "-".repeat(60));

    println!("{}", functional::append("1,2,3,4", 5));
    println!("{}", functional::swap("a:b:c", 0, 2)?);
    println!("{}", functional::change_delims("a,b,c", ";"));
    println!(
        "{}",
        functional::replace("hello i am lars", "i,am,lars", "you,are,peter")
    );

    /* Expected Output:
    1,2,3,4,5
    c:b:a
    a;b;c
    hello you are peter
    */

    println!();
    Ok(())
}
