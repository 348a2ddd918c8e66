use ugtabs_rs::{RawSearchArgs, encode_params, format_request_search, format_search_query};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let uri = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/search.php?q=hotel%20california&type=chords&page=2".to_string());

    let parsed = format_request_search(&uri)?;
    println!("endpoint: {}", parsed.kind);
    for (k, v) in &parsed.args {
        println!("  {k} = {v}");
    }

    let raw = parsed
        .args
        .iter()
        .fold(RawSearchArgs::new(), |raw, (k, v)| raw.arg(k.as_str(), v.as_str()));

    match format_search_query(&raw) {
        Ok(args) => println!("upstream query: {}", encode_params(&args.to_params())),
        Err(e) => println!("rejected ({:?}): {e}", e.class()),
    }
    Ok(())
}
