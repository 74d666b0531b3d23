//! The interactive screen loop.
//!
//! One prompt loop per router state. Each pass renders the current screen,
//! reads a line, and dispatches it as a discrete navigation or action event;
//! the router decides what is on screen next.

use std::path::Path;
use std::str::FromStr;

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use sportmatch_application::{
    BrowseUseCase, ChatUseCase, EventUseCase, NewEventRequest, ProfileUseCase,
};
use sportmatch_core::chat::ChatSession;
use sportmatch_core::discovery::{DisplayItem, SearchFilter};
use sportmatch_core::event::{SkillLevel, BROWSE_ACTIVITIES, CREATE_ACTIVITIES, PIL_VENUES};
use sportmatch_core::view::{View, ViewRouter};

use crate::CliHelper;

/// Whether the main loop keeps running after a screen pass.
enum Flow {
    Continue,
    Quit,
}

/// The assembled application: router state plus the injected use cases.
pub struct App {
    router: ViewRouter,
    browse: BrowseUseCase,
    events: EventUseCase,
    chat: ChatUseCase,
    profile: ProfileUseCase,
    /// Current browse display list (recomputed on every search action)
    display: Vec<DisplayItem>,
    /// Current browse filter selections
    filter: SearchFilter,
    /// Active chat session while on the chat screen
    session: Option<ChatSession>,
}

impl App {
    pub fn new(
        browse: BrowseUseCase,
        events: EventUseCase,
        chat: ChatUseCase,
        profile: ProfileUseCase,
    ) -> Self {
        Self {
            router: ViewRouter::new(),
            browse,
            events,
            chat,
            profile,
            display: Vec::new(),
            filter: SearchFilter::any(),
            session: None,
        }
    }

    /// Runs the screen loop until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        let mut rl: Editor<CliHelper, DefaultHistory> = Editor::new()?;
        rl.set_helper(Some(CliHelper::new()));

        println!("{}", "=== SPORTMATCH · Gran Canaria ===".bright_magenta().bold());
        println!(
            "{}",
            "Encuentra compañeros, organiza partidos y disfruta del deporte en la isla."
                .bright_black()
        );
        println!();

        loop {
            let flow = match self.router.current() {
                View::Home => self.home_screen(&mut rl)?,
                View::CreateEvent => self.create_screen(&mut rl).await?,
                View::Browse => self.browse_screen(&mut rl).await?,
                View::Chat => self.chat_screen(&mut rl)?,
                View::Profile => self.profile_screen(&mut rl).await?,
            };

            if matches!(flow, Flow::Quit) {
                println!("{}", "¡Hasta pronto!".bright_green());
                return Ok(());
            }
        }
    }

    // ===== Home =====

    fn home_screen(&mut self, rl: &mut Editor<CliHelper, DefaultHistory>) -> Result<Flow> {
        println!("{}", "HOME".bold());
        println!("  1) Create an event");
        println!("  2) Browse events");
        println!("  3) Profile & badges");
        println!("  q) Quit");

        let Some(line) = read_line(rl, ">> ")? else {
            return Ok(Flow::Quit);
        };

        match line.as_str() {
            "1" | "create" => self.router.navigate(View::CreateEvent),
            "2" | "browse" => self.router.navigate(View::Browse),
            "3" | "profile" => self.router.navigate(View::Profile),
            "q" | "quit" | "exit" => return Ok(Flow::Quit),
            "" => {}
            _ => println!("{}", "Unknown command".bright_black()),
        }

        Ok(Flow::Continue)
    }

    // ===== Create event =====

    async fn create_screen(&mut self, rl: &mut Editor<CliHelper, DefaultHistory>) -> Result<Flow> {
        println!("{}", "CREATE EVENT".bold());
        println!("{}", "(Ctrl-C cancels and returns home)".bright_black());

        let Some(request) = self.read_event_form(rl)? else {
            self.router.navigate(View::Home);
            return Ok(Flow::Continue);
        };

        match self.events.create(request).await {
            Ok(event) => {
                println!(
                    "{}",
                    format!(
                        "¡Evento publicado con éxito! 🎉  {} · {} · {} {}",
                        event.activity, event.location, event.date, event.time
                    )
                    .green()
                );
            }
            Err(err) => println!("{}", format!("Could not publish the event: {}", err).yellow()),
        }

        self.router.navigate(View::Home);
        Ok(Flow::Continue)
    }

    /// Walks the creation form. `None` means the user cancelled.
    fn read_event_form(
        &self,
        rl: &mut Editor<CliHelper, DefaultHistory>,
    ) -> Result<Option<NewEventRequest>> {
        let Some(activity) = pick_from_catalog(rl, "Activity", &CREATE_ACTIVITIES)? else {
            return Ok(None);
        };

        let Some(level) = pick_level(rl)? else {
            return Ok(None);
        };

        let Some(mentor_line) = read_form_line(rl, "Mentor for beginners? (y/N): ")? else {
            return Ok(None);
        };
        let is_mentor = matches!(mentor_line.as_str(), "y" | "yes" | "s" | "si" | "sí");

        let Some(location) = pick_from_catalog(rl, "Venue (PIL)", &PIL_VENUES)? else {
            return Ok(None);
        };

        let Some(date) = read_required(rl, "Date (YYYY-MM-DD): ")? else {
            return Ok(None);
        };
        let Some(time) = read_required(rl, "Time (HH:MM): ")? else {
            return Ok(None);
        };

        Ok(Some(NewEventRequest {
            activity,
            level,
            location,
            date,
            time,
            is_mentor,
        }))
    }

    // ===== Browse =====

    async fn browse_screen(&mut self, rl: &mut Editor<CliHelper, DefaultHistory>) -> Result<Flow> {
        // First entry shows the whole inventory untagged.
        if self.display.is_empty() {
            self.display = self.browse.list_all().await?;
        }

        println!("{}", "BROWSE EVENTS".bold());
        println!(
            "{}",
            format!(
                "Filters: activity={} level={}",
                self.filter.activity.as_deref().unwrap_or("All"),
                self.filter
                    .level
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "All".to_string()),
            )
            .bright_black()
        );
        println!(
            "{}",
            format!("Quick activities: {}", BROWSE_ACTIVITIES.join(" | ")).bright_black()
        );

        if self.display.is_empty() {
            println!("{}", "Sin resultados por ahora.".yellow());
            println!(
                "{}",
                "Prueba a cambiar los filtros o crea tu propio evento.".bright_black()
            );
        } else {
            for (index, item) in self.display.iter().enumerate() {
                println!("{}", render_display_item(index, item));
            }
        }
        println!(
            "{}",
            "Commands: search | activity <name|all> | level <name|all> | join <n> | back"
                .bright_black()
        );

        let Some(line) = read_line(rl, "browse> ")? else {
            return Ok(Flow::Quit);
        };
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("search") => {
                self.display = self.browse.search(&self.filter).await?;
            }
            Some("activity") => {
                let rest = parts.collect::<Vec<_>>().join(" ");
                self.filter.activity = match rest.as_str() {
                    "" | "all" | "All" => None,
                    name => Some(name.to_string()),
                };
            }
            Some("level") => match parts.next() {
                None | Some("all") | Some("All") => self.filter.level = None,
                Some(raw) => match SkillLevel::from_str(raw) {
                    Ok(level) => self.filter.level = Some(level),
                    Err(_) => println!(
                        "{}",
                        "Levels: beginner, intermediate, expert, all".yellow()
                    ),
                },
            },
            Some("join") => {
                let picked = parts
                    .next()
                    .and_then(|raw| raw.parse::<usize>().ok())
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| self.display.get(i))
                    .map(|item| item.event.clone());
                match picked {
                    Some(event) => {
                        if self.router.join_event(event.clone()) {
                            self.session = Some(self.chat.join(event));
                            self.display.clear();
                        }
                    }
                    None => println!("{}", "join expects a listed event number".yellow()),
                }
            }
            Some("back") => {
                self.display.clear();
                self.filter = SearchFilter::any();
                self.router.navigate(View::Home);
            }
            Some(_) => println!("{}", "Unknown command".bright_black()),
            None => {}
        }

        Ok(Flow::Continue)
    }

    // ===== Chat =====

    fn chat_screen(&mut self, rl: &mut Editor<CliHelper, DefaultHistory>) -> Result<Flow> {
        // A chat screen without a session cannot be rendered; fall back home.
        let Some(event) = self.router.carried_event().cloned() else {
            self.router.navigate(View::Home);
            return Ok(Flow::Continue);
        };
        if self.session.is_none() {
            self.router.leave_chat();
            return Ok(Flow::Continue);
        }

        println!(
            "{}",
            format!("CHAT · {} @ {}", event.activity, event.location).bold()
        );
        println!(
            "{}",
            format!("Evento programado para: {} a las {}", event.date, event.time).bright_black()
        );
        println!(
            "{}",
            "⚠️  Por tu seguridad: no compartas rutas no oficiales ni datos personales \
             sensibles. Verifica siempre el clima en la AEMET antes de salir."
                .yellow()
        );
        println!();

        if let Some(session) = &self.session {
            for message in session.messages() {
                let header = format!("[{} · {}]", message.sender, format_clock(message.timestamp));
                if message.is_me {
                    println!("{}", header.green());
                    println!("{}", message.text.green());
                } else {
                    println!("{}", header.bright_magenta());
                    println!("{}", message.text.bright_blue());
                }
            }
        }
        println!(
            "{}",
            "Type a message, or /exit to leave the event".bright_black()
        );

        let Some(line) = read_line(rl, "chat> ")? else {
            return Ok(Flow::Quit);
        };

        if line == "/exit" {
            let Some(confirm) = read_line(rl, "¿Seguro que quieres salir del evento? (y/N): ")?
            else {
                return Ok(Flow::Quit);
            };
            if matches!(confirm.as_str(), "y" | "yes" | "s" | "si" | "sí") {
                if let Some(session) = self.session.take() {
                    self.chat.leave(session);
                }
                self.router.leave_chat();
            }
            return Ok(Flow::Continue);
        }

        if let Some(session) = &mut self.session {
            self.chat.send(session, &line);
        }

        Ok(Flow::Continue)
    }

    // ===== Profile =====

    async fn profile_screen(&mut self, rl: &mut Editor<CliHelper, DefaultHistory>) -> Result<Flow> {
        let profile = self.profile.profile();

        println!("{}", "PROFILE".bold());
        println!("{}", profile.name.bright_magenta().bold());
        println!("{}", format!("\"{}\"", profile.bio).bright_black());
        println!(
            "Nivel: {}  ({}% para el siguiente)",
            profile.level.to_string().bold(),
            profile.progress_to_next
        );

        match self.profile.avatar().await? {
            Some(data_url) => println!(
                "{}",
                format!("Avatar: set ({} bytes encoded)", data_url.len()).green()
            ),
            None => println!("{}", "Avatar: not set".bright_black()),
        }

        println!();
        println!("{}", "🏅 MIS MEDALLAS".bold());
        for badge in self.profile.badges() {
            println!(
                "  {} {} — {}",
                badge.icon,
                accent(&badge.title, &badge.color).bold(),
                badge.description.bright_black()
            );
        }

        println!();
        println!("{}", "📜 ÚLTIMOS PARTIDOS".bold());
        for entry in self.profile.history() {
            println!(
                "  {} en {} · {}",
                entry.activity.bold(),
                entry.location,
                entry.when.bright_black()
            );
        }
        println!(
            "{}",
            format!("Miembro desde {} · Gran Canaria", profile.member_since).bright_black()
        );
        println!(
            "{}",
            "Commands: avatar <path-to-image> | back".bright_black()
        );

        let Some(line) = read_line(rl, "profile> ")? else {
            return Ok(Flow::Quit);
        };
        let mut parts = line.split_whitespace();

        match parts.next() {
            Some("avatar") => match parts.next() {
                Some(raw_path) => {
                    match sportmatch_infrastructure::encode_data_url(Path::new(raw_path)).await {
                        Ok(data_url) => {
                            self.profile.set_avatar(&data_url).await?;
                            println!("{}", "Avatar updated".green());
                        }
                        Err(err) => println!("{}", format!("Could not load image: {}", err).yellow()),
                    }
                }
                None => println!("{}", "avatar expects a file path".yellow()),
            },
            Some("back") => self.router.navigate(View::Home),
            Some(_) => println!("{}", "Unknown command".bright_black()),
            None => {}
        }

        Ok(Flow::Continue)
    }
}

// ===== Prompt helpers =====

/// Reads one trimmed line. `None` means the user asked to leave (Ctrl-D);
/// Ctrl-C clears the line and stays on the screen.
fn read_line(
    rl: &mut Editor<CliHelper, DefaultHistory>,
    prompt: &str,
) -> Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => {
            let trimmed = line.trim().to_string();
            if !trimmed.is_empty() {
                let _ = rl.add_history_entry(&line);
            }
            Ok(Some(trimmed))
        }
        Err(ReadlineError::Interrupted) => {
            println!("{}", "CTRL-C detected.".yellow());
            Ok(Some(String::new()))
        }
        Err(ReadlineError::Eof) => {
            println!("{}", "CTRL-D detected. Exiting...".bright_green());
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// Reads one trimmed line for a form step; blank is allowed. `None` means
/// the user cancelled (Ctrl-C or Ctrl-D).
fn read_form_line(
    rl: &mut Editor<CliHelper, DefaultHistory>,
    prompt: &str,
) -> Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

/// Re-prompts until a non-blank value is entered. `None` means cancelled.
fn read_required(
    rl: &mut Editor<CliHelper, DefaultHistory>,
    prompt: &str,
) -> Result<Option<String>> {
    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    println!("{}", "This field is required.".yellow());
                    continue;
                }
                return Ok(Some(trimmed.to_string()));
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
    }
}

/// Shows a numbered catalog and reads a selection, defaulting to the first
/// entry on blank input. `None` means cancelled.
fn pick_from_catalog(
    rl: &mut Editor<CliHelper, DefaultHistory>,
    label: &str,
    catalog: &[&str],
) -> Result<Option<String>> {
    println!("{}:", label.bold());
    for (index, entry) in catalog.iter().enumerate() {
        println!("  {:>2}) {}", index + 1, entry);
    }

    loop {
        match rl.readline(&format!("{} [1-{}, default 1]: ", label, catalog.len())) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    return Ok(Some(catalog[0].to_string()));
                }
                match trimmed.parse::<usize>() {
                    Ok(n) if (1..=catalog.len()).contains(&n) => {
                        return Ok(Some(catalog[n - 1].to_string()));
                    }
                    _ => println!(
                        "{}",
                        format!("Pick a number between 1 and {}.", catalog.len()).yellow()
                    ),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
    }
}

/// Reads the skill level selection, defaulting to Beginner.
fn pick_level(rl: &mut Editor<CliHelper, DefaultHistory>) -> Result<Option<SkillLevel>> {
    loop {
        match rl.readline("Level [1 Beginner / 2 Intermediate / 3 Expert, default 1]: ") {
            Ok(line) => {
                let level = match line.trim() {
                    "" | "1" => SkillLevel::Beginner,
                    "2" => SkillLevel::Intermediate,
                    "3" => SkillLevel::Expert,
                    _ => {
                        println!("{}", "Pick 1, 2, or 3.".yellow());
                        continue;
                    }
                };
                return Ok(Some(level));
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(None),
            Err(err) => return Err(err.into()),
        }
    }
}

// ===== Rendering helpers =====

fn render_display_item(index: usize, item: &DisplayItem) -> String {
    let event = &item.event;
    let mut line = format!(
        " {:>2}. {} en {} [{}] 📅 {} ⏰ {}",
        index + 1,
        event.activity.bold(),
        event.location,
        event.level,
        event.date,
        event.time,
    );
    if event.is_mentor {
        line.push_str(&format!("  {}", "🛡️ Mentor Activo".green()));
    }
    if item.is_forced {
        line.push_str(&format!("  {}", "✨ Sugerencia SportMatch".yellow()));
    }
    line
}

fn accent(text: &str, color: &str) -> colored::ColoredString {
    match color {
        "yellow" => text.yellow(),
        "cyan" => text.cyan(),
        "green" => text.green(),
        "magenta" => text.magenta(),
        _ => text.normal(),
    }
}

fn format_clock(epoch_ms: i64) -> String {
    chrono::DateTime::from_timestamp_millis(epoch_ms)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default()
}
