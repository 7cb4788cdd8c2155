use crate::{output, theme};
use anyhow::Result;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use filmes::{Dashboard, Interaction, NewFilm, Render};

const OTHER: &str = "(other…)";
const NONE: &str = "(none)";

/// Values that survive between passes, like sidebar widgets keep theirs.
#[derive(Debug, Default)]
struct Widgets {
    show_all: bool,
    search_text: String,
    director: Option<String>,
}

impl Widgets {
    /// Widget state with every button released.
    fn idle(&self) -> Interaction {
        Interaction {
            show_all: self.show_all,
            search_text: self.search_text.clone(),
            director: self.director.clone(),
            ..Interaction::default()
        }
    }
}

/// Menu loop. Every choice triggers one render pass.
pub(crate) async fn run(dashboard: &mut Dashboard, term: &Term) -> Result<()> {
    let theme = theme::dialoguer_theme();
    let mut widgets = Widgets::default();

    let mut render = render_pass(dashboard, term, &widgets.idle()).await?;

    loop {
        let show_all = format!(
            "[{}] Show all films",
            if widgets.show_all { "x" } else { " " }
        );
        let items = [
            show_all.as_str(),
            "Search film by title",
            "Filter by director",
            "Create new film",
            "Quit",
        ];

        let choice = Select::with_theme(&theme)
            .with_prompt("Menu")
            .items(&items)
            .default(0)
            .interact_on(term)?;

        let interaction = match choice {
            0 => {
                widgets.show_all = !widgets.show_all;
                widgets.idle()
            }
            1 => {
                widgets.search_text = Input::<String>::with_theme(&theme)
                    .with_prompt("Film title")
                    .with_initial_text(widgets.search_text.clone())
                    .allow_empty(true)
                    .interact_text_on(term)?;

                Interaction {
                    search_clicked: true,
                    ..widgets.idle()
                }
            }
            2 => {
                let directors = &render.options.directors;
                if directors.is_empty() {
                    term.write_line("No directors to choose from.")?;
                    continue;
                }

                let current = widgets
                    .director
                    .as_ref()
                    .and_then(|d| directors.iter().position(|o| o == d))
                    .unwrap_or(0);

                let index = Select::with_theme(&theme)
                    .with_prompt("Select director")
                    .items(directors)
                    .default(current)
                    .interact_on(term)?;
                widgets.director = Some(directors[index].clone());

                Interaction {
                    director_clicked: true,
                    ..widgets.idle()
                }
            }
            3 => {
                let film = create_form(&theme, term, &render)?;
                widgets.idle().create(film)
            }
            _ => return Ok(()),
        };

        render = render_pass(dashboard, term, &interaction).await?;
    }
}

async fn render_pass(
    dashboard: &mut Dashboard,
    term: &Term,
    interaction: &Interaction,
) -> Result<Render> {
    if !dashboard.cache().is_populated() {
        term.write_line("Loading data...")?;
    }

    let render = dashboard.render(interaction).await?;

    if render.from_cache {
        log::debug!("rendered from cached dataset");
    } else {
        term.write_line("Done!")?;
    }

    output::print_render(term, &render)?;
    Ok(render)
}

fn create_form(theme: &ColorfulTheme, term: &Term, render: &Render) -> Result<NewFilm> {
    let name = Input::<String>::with_theme(theme)
        .with_prompt("Name")
        .allow_empty(true)
        .interact_text_on(term)?;

    Ok(NewFilm {
        name,
        company: choose(theme, term, "Company", &render.options.companies)?,
        director: choose(theme, term, "Director", &render.options.directors)?,
        genre: choose(theme, term, "Genre", &render.options.genres)?,
    })
}

/// Pick one of the known values, type a new one, or leave it unset.
fn choose(
    theme: &ColorfulTheme,
    term: &Term,
    label: &str,
    options: &[String],
) -> Result<Option<String>> {
    let items: Vec<&str> = options
        .iter()
        .map(String::as_str)
        .chain([OTHER, NONE])
        .collect();

    let index = Select::with_theme(theme)
        .with_prompt(label)
        .items(&items)
        .default(0)
        .interact_on(term)?;

    if index < options.len() {
        return Ok(Some(options[index].clone()));
    }

    if items[index] == NONE {
        return Ok(None);
    }

    let value = Input::<String>::with_theme(theme)
        .with_prompt(label)
        .interact_text_on(term)?;
    Ok(Some(value))
}
