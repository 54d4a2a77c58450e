//! Link command - print a UI link with facets applied.

use refine::FacetColumn;

use super::facets::parse_column;
use super::Context;

pub fn run(ctx: &Context, columns: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let columns: Vec<FacetColumn> = columns.iter().map(|c| parse_column(c)).collect();
    let client = ctx.open()?;
    let link = client.link_to_facets(&columns)?;

    if ctx.json {
        println!("{}", serde_json::json!({ "link": link }));
    } else {
        println!("{}", link);
    }

    Ok(())
}
