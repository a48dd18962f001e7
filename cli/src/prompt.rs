use sixdegrees_core::{SearchConfig, find_shortest_path};
use std::error::Error;
use std::io::{BufRead, Write};

use crate::app::SixDegreesApp;
use crate::colors::ColorScheme;
use crate::display::{DisplayOptions, render_search_info, render_search_results};

/// Asks until the reply names a credited actor. `None` on an empty reply or
/// end of input.
pub fn prompt_for_actor<R: BufRead, W: Write>(
    prompt: &str,
    app: &SixDegreesApp,
    input: &mut R,
    output: &mut W,
) -> Result<Option<String>, Box<dyn Error>> {
    loop {
        write!(output, "{} [or <enter> to quit]: ", prompt)?;
        output.flush()?;

        let mut response = String::new();
        if input.read_line(&mut response)? == 0 {
            return Ok(None);
        }
        let name = response.trim_end_matches(['\r', '\n']);
        if name.is_empty() {
            return Ok(None);
        }

        if app.lookup_actor(name)?.is_some() {
            return Ok(Some(name.to_string()));
        }

        writeln!(
            output,
            "We couldn't find \"{}\" in the movie database. Please try again.",
            name
        )?;
        let suggestions = app.suggest_names(name, 5)?;
        if !suggestions.is_empty() {
            writeln!(output, "Did you mean: {}?", suggestions.join(", "))?;
        }
    }
}

pub fn run_interactive<R: BufRead, W: Write>(
    app: &SixDegreesApp,
    config: &SearchConfig,
    options: &DisplayOptions,
    colors: &ColorScheme,
    input: &mut R,
    output: &mut W,
) -> Result<(), Box<dyn Error>> {
    loop {
        let Some(source) = prompt_for_actor("Actor or actress", app, input, output)? else {
            break;
        };
        let Some(target) = prompt_for_actor("Another actor or actress", app, input, output)?
        else {
            break;
        };

        if source == target {
            writeln!(
                output,
                "Good one. This is only interesting if you specify two different people."
            )?;
            continue;
        }

        if options.verbose {
            writeln!(output, "{}", render_search_info(&source, &target, config, colors))?;
        }
        let report = find_shortest_path(&app.db, &source, &target, config);
        writeln!(
            output,
            "\n{}\n",
            render_search_results(&report, &source, &target, options, colors)
        )?;
    }

    writeln!(output, "Thanks for playing!")?;
    Ok(())
}
