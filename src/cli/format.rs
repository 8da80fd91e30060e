//! Format output dispatch helpers

/// Dispatch on the output format when the json branch returns a Result and
/// the others return ().
///
/// ```rust,ignore
/// output_by_format_result!(ctx.cli.format,
///     json => print_json(&graph),
///     human => { println!("{} nodes", graph.order()); },
///     records => { println!("H snipgraph=1 mode=graph"); }
/// )?;
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
