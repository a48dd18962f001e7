use sixdegrees_core::{ActorPath, SearchConfig, SearchReport, SearchStats};

use crate::colors::ColorScheme;

#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayOptions {
    pub verbose: bool,
    pub quiet: bool,
}

pub fn render_search_info(
    from_name: &str,
    to_name: &str,
    config: &SearchConfig,
    colors: &ColorScheme,
) -> String {
    let mut lines = vec![format!(
        "🎬 Finding path from {} to {}",
        colors.actor_name(&format!("\"{}\"", from_name)),
        colors.actor_name(&format!("\"{}\"", to_name))
    )];

    lines.push(format!(
        "⚙️  Searching up to {} connections",
        colors.number(&config.max_hops.to_string())
    ));

    if !config.start_from_fewer_credits {
        lines.push("↪️  Starting from the first actor".to_string());
    }

    lines.push("🔍 Searching...".to_string());
    lines.join("\n")
}

pub fn render_search_results(
    report: &SearchReport,
    from_name: &str,
    to_name: &str,
    options: &DisplayOptions,
    colors: &ColorScheme,
) -> String {
    let mut output = String::new();

    if options.verbose {
        output.push_str("\n---\n\n");
    }

    match &report.path {
        Some(path) => output.push_str(&render_path(path, options, colors)),
        None => output.push_str(&format!(
            "{} {} and {}",
            colors.error("❌ No path found between"),
            colors.actor_name(&format!("\"{}\"", from_name)),
            colors.actor_name(&format!("\"{}\"", to_name))
        )),
    }

    if options.verbose {
        output.push('\n');
        output.push_str(&render_search_statistics(&report.stats, colors));
    }

    output
}

fn render_path(path: &ActorPath, options: &DisplayOptions, colors: &ColorScheme) -> String {
    let mut lines = Vec::new();

    if options.verbose {
        lines.push(format!(
            "{} Found path with {} connections:\n",
            colors.success("✅"),
            colors.number(&path.len().to_string())
        ));
    }

    lines.push(render_path_flow(path, colors));

    // Detailed list only if not in quiet mode
    if !options.quiet && !path.is_empty() {
        lines.push(String::new());
        let mut previous = path.start();
        for (step_index, connection) in path.connections().iter().enumerate() {
            let step_number = format!("{}.", step_index + 1);
            lines.push(format!(
                "{:3} {} was in {} with {}.",
                colors.step_number(&step_number),
                colors.actor_name(previous),
                colors.film(&connection.film.to_string()),
                colors.actor_name(&connection.actor)
            ));
            previous = connection.actor.as_str();
        }
    }

    lines.join("\n")
}

/// `"A" → Film (Year) → "B" → ...`
pub fn render_path_flow(path: &ActorPath, colors: &ColorScheme) -> String {
    let mut flow = vec![colors.actor_name(&format!("\"{}\"", path.start())).to_string()];
    for connection in path.connections() {
        flow.push(
            colors
                .film(&format!("{} ({})", connection.film.title, connection.film.year))
                .to_string(),
        );
        flow.push(colors.actor_name(&format!("\"{}\"", connection.actor)).to_string());
    }
    flow.join(" → ")
}

fn render_search_statistics(stats: &SearchStats, colors: &ColorScheme) -> String {
    format!(
        "\n---\n\n📊 Explored {} actors and {} films in {} ms",
        colors.number(&format_number(stats.actors_visited)),
        colors.number(&format_number(stats.films_visited)),
        colors.number(&stats.duration_ms.to_string())
    )
}

pub fn render_database_stats(
    actor_count: usize,
    movie_count: usize,
    healthy: bool,
    colors: &ColorScheme,
) -> String {
    let status = if healthy {
        colors.success("ok")
    } else {
        colors.error("damaged")
    };
    format!(
        "🎭 {} actors\n🎞️  {} movies\n🩺 Data files: {}",
        colors.number(&format_number(actor_count)),
        colors.number(&format_number(movie_count)),
        status
    )
}

/// Groups digits in threes: `1234567` becomes `1,234,567`.
pub fn format_number(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
