//! Call command - run any server command.

use refine::Params;

use super::Context;

pub fn run(
    ctx: &Context,
    command: String,
    params: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_params(&params)?;
    let client = ctx.open()?;

    let response = client.call(&command, params)?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

/// Parse `KEY=VALUE` arguments, keeping their order.
pub fn parse_params(raw: &[String]) -> Result<Params, String> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| format!("Expected KEY=VALUE, got '{}'", pair))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params() {
        let raw = vec!["limit=10".to_string(), "engine={\"a\":1}".to_string()];
        let params = parse_params(&raw).unwrap();
        assert_eq!(params["limit"], "10");
        assert_eq!(params["engine"], "{\"a\":1}");
    }

    #[test]
    fn test_parse_params_rejects_bare_key() {
        assert!(parse_params(&["limit".to_string()]).is_err());
    }
}
