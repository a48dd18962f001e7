use clap::Parser;
use sixdegrees::colors::ColorScheme;
use sixdegrees::display::{render_database_stats, render_search_info, render_search_results};
use sixdegrees::json_output::{create_json_output, render_json_output};
use sixdegrees::logging::init_logging;
use sixdegrees::prompt::run_interactive;
use sixdegrees::*;
use sixdegrees_core::{DatabaseBuilder, find_shortest_path};
use std::error::Error;
use std::path::Path;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error_message) = run(&args, &colors) {
        eprintln!("{} {}", colors.error("❌ Error:"), error_message);
        std::process::exit(1);
    }
}

fn run(args: &Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    match &args.command {
        Command::Path {
            from,
            to,
            search,
            json,
            quiet,
        } => {
            let app = SixDegreesApp::open(&args.data)?;
            let options = DisplayOptions {
                verbose: args.verbose,
                quiet: *quiet,
            };
            run_path_search(&app, from, to, search, *json, &options, colors)
        }
        Command::Interactive { search } => {
            let app = SixDegreesApp::open(&args.data)?;
            let options = DisplayOptions {
                verbose: args.verbose,
                quiet: false,
            };
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_interactive(
                &app,
                &search.config(),
                &options,
                colors,
                &mut stdin.lock(),
                &mut stdout.lock(),
            )
        }
        Command::Build { input, output } => run_build(input, output, colors),
        Command::Stats => {
            let app = SixDegreesApp::open(&args.data)?;
            println!(
                "{}",
                render_database_stats(
                    app.db.actor_count()?,
                    app.db.movie_count()?,
                    app.db.is_healthy(),
                    colors
                )
            );
            Ok(())
        }
    }
}

fn run_path_search(
    app: &SixDegreesApp,
    from: &str,
    to: &str,
    search: &SearchArgs,
    json: bool,
    options: &DisplayOptions,
    colors: &ColorScheme,
) -> Result<(), Box<dyn Error>> {
    app.require_actor(from)?;
    app.require_actor(to)?;

    if from == to {
        println!("Good one. This is only interesting if you specify two different people.");
        return Ok(());
    }

    let config = search.config();
    if options.verbose && !json {
        println!("{}", render_search_info(from, to, &config, colors));
    }

    let report = find_shortest_path(&app.db, from, to, &config);

    if json {
        let json_output = create_json_output(&report, from, to, &config);
        println!("{}", render_json_output(&json_output)?);
    } else {
        println!("{}", render_search_results(&report, from, to, options, colors));
    }
    Ok(())
}

fn run_build(input: &Path, output: &Path, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let builder = DatabaseBuilder::from_tsv_file(input)?;
    builder.write_to(output)?;

    println!(
        "{} Wrote {} actors and {} movies to {}",
        colors.success("✅"),
        format_number(builder.actor_count()),
        format_number(builder.movie_count()),
        output.display()
    );
    Ok(())
}
