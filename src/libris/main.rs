use chrono::{Local, NaiveDate};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use libris::api::{BookPatch, CmdMessage, ConfigAction, LibrisApi, MessageLevel, NewBook};
use libris::config::LibrisConfig;
use libris::error::{LibrisError, Result};
use libris::index::{DisplayBook, DisplayIndex};
use libris::model::{BookState, Partner};
use libris::store::fs::FileStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, PartnerCommands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: LibrisApi<FileStore>,
    config: LibrisConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            short_title,
            released,
            pages,
            rating,
            cost,
            price,
            currency,
            publisher,
            authors,
            state,
            notes,
            description,
        }) => {
            let new = NewBook {
                title,
                short_title,
                notes,
                state: parse_state(state.as_deref())?,
                date_release: released,
                pages,
                reader_rating: rating,
                cost_price: cost,
                retail_price: price,
                currency,
                publisher,
                authors,
                description,
            };
            let default_state = ctx.config.default_state;
            let result = ctx.api.add_book(new, default_state)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::List { state, age, search }) => handle_list(&mut ctx, state, age, search),
        Some(Commands::View { indexes }) => handle_view(&ctx, indexes),
        Some(Commands::Update {
            index,
            title,
            short_title,
            released,
            clear_released,
            pages,
            rating,
            cost,
            price,
            currency,
            publisher,
            authors,
            state,
            out_of_print,
            notes,
            description,
        }) => {
            let patch = BookPatch {
                title,
                short_title,
                notes,
                state: parse_state(state.as_deref())?,
                out_of_print,
                date_release: released,
                clear_release: clear_released,
                pages,
                reader_rating: rating,
                cost_price: cost,
                retail_price: price,
                currency,
                publisher,
                authors: if authors.is_empty() {
                    None
                } else {
                    Some(authors)
                },
                description,
            };
            let result = ctx.api.update_book(&index, &patch)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Age { index, days }) => {
            let result = ctx.api.set_age(&index, days)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Delete { indexes }) => {
            let result = ctx.api.delete_books(&indexes)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Search { term }) => {
            let result = ctx.api.search_books(&term)?;
            print_books(&result.listed_books);
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Partner { action }) => handle_partner(&mut ctx, action),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => {
            let result = ctx.api.init()?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Doctor) => {
            let result = ctx.api.doctor()?;
            print_messages(&result.messages);
            Ok(())
        }
        None => handle_list(&mut ctx, None, None, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = match &cli.catalog {
        Some(dir) => dir.clone(),
        None => {
            let proj_dirs =
                ProjectDirs::from("com", "libris", "libris").expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = LibrisConfig::load(&root).unwrap_or_default();
    let store = FileStore::new(root.clone());
    let api = LibrisApi::new(store, root);

    Ok(AppContext { api, config })
}

fn parse_state(s: Option<&str>) -> Result<Option<BookState>> {
    s.map(|s| s.parse().map_err(LibrisError::Api)).transpose()
}

fn handle_list(
    ctx: &mut AppContext,
    state: Option<String>,
    age: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let result = if let Some(term) = search {
        ctx.api.search_books(&term)?
    } else {
        let state = parse_state(state.as_deref())?;
        ctx.api.list_books(state, age.as_deref())?
    };
    print_books(&result.listed_books);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_books(&indexes)?;
    print_full_books(&result.listed_books, &result.partners, &ctx.config);
    print_messages(&result.messages);
    Ok(())
}

fn handle_partner(ctx: &mut AppContext, action: PartnerCommands) -> Result<()> {
    match action {
        PartnerCommands::Add { name, city, email } => {
            let result = ctx.api.add_partner(name, city, email)?;
            print_messages(&result.messages);
        }
        PartnerCommands::List => {
            let result = ctx.api.list_partners()?;
            if result.partners.is_empty() {
                println!("No partners found.");
            }
            for partner in &result.partners {
                match &partner.city {
                    Some(city) => println!("{} — {}", partner.name.bold(), city),
                    None => println!("{}", partner.name.bold()),
                }
            }
        }
        PartnerCommands::Books { name } => {
            let result = ctx.api.partner_books(&name)?;
            if let Some(pb) = &result.partner_books {
                println!("{}", pb.partner.name.bold());
                println!("Published:");
                if pb.published.is_empty() {
                    println!("    (none)");
                } else {
                    print_books(&pb.published);
                }
                println!("Authored:");
                if pb.authored.is_empty() {
                    println!("    (none)");
                } else {
                    print_books(&pb.authored);
                }
            }
        }
    }
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("date-format"), None) => ConfigAction::ShowKey("date-format".to_string()),
        (Some("date-format"), Some(v)) => ConfigAction::SetDateFormat(v),
        (Some("default-state"), None) => ConfigAction::ShowKey("default-state".to_string()),
        (Some("default-state"), Some(v)) => {
            ConfigAction::SetDefaultState(v.parse().map_err(LibrisError::Api)?)
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        match key.as_deref() {
            Some("date-format") => println!("date-format = {}", config.date_format),
            Some("default-state") => println!("default-state = {}", config.default_state),
            _ => {
                println!("date-format = {}", config.date_format);
                println!("default-state = {}", config.default_state);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_full_books(books: &[DisplayBook], partners: &[Partner], config: &LibrisConfig) {
    for (i, db) in books.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        let card = &db.book.card;
        println!("{} {}", db.index.to_string().yellow(), card.title.bold());
        println!("--------------------------------");
        println!("State:     {}", card.state);
        if let Some(date) = card.date_release {
            let age = card.age_days.unwrap_or_default();
            println!(
                "Released:  {} ({} days ago)",
                date.format(&config.date_format),
                age
            );
        }
        if let Some(short) = &card.short_title {
            println!("Short:     {}", short);
        }
        if let Some(pages) = card.pages {
            println!("Pages:     {}", pages);
        }
        if let Some(rating) = card.reader_rating {
            println!("Rating:    {:.1}", rating);
        }
        if let Some(price) = card.retail_price {
            match &card.currency {
                Some(currency) => println!("Price:     {:.2} {}", price, currency),
                None => println!("Price:     {:.2}", price),
            }
        }
        if let Some(publisher) = card
            .publisher_id
            .and_then(|id| partners.iter().find(|p| p.id == id))
        {
            match &publisher.city {
                Some(city) => println!("Publisher: {} ({})", publisher.name, city),
                None => println!("Publisher: {}", publisher.name),
            }
        }
        let authors: Vec<&str> = card
            .author_ids
            .iter()
            .filter_map(|id| partners.iter().find(|p| &p.id == id))
            .map(|p| p.name.as_str())
            .collect();
        if !authors.is_empty() {
            println!("Authors:   {}", authors.join(", "));
        }
        if card.out_of_print {
            println!("{}", "Out of print".red());
        }
        if let Some(notes) = &card.notes {
            println!("Notes:     {}", notes);
        }
        if !db.book.description.is_empty() {
            println!();
            println!("{}", db.book.description);
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 16;
const OOP_MARKER: &str = "⊘";

fn print_books(books: &[DisplayBook]) {
    if books.is_empty() {
        println!("No books found.");
        return;
    }

    let mut last_bucket_was_available = true;
    for db in books {
        let is_available = matches!(db.index, DisplayIndex::Available(_));
        if last_bucket_was_available && !is_available {
            println!();
        }
        last_bucket_was_available = is_available;

        let idx_str = format!("{}. ", db.index);
        let left_prefix = "    ";

        let right_suffix = if db.book.card.out_of_print {
            format!("{} ", OOP_MARKER)
        } else {
            "  ".to_string()
        };

        let released_ago = format_released_ago(db.book.card.date_release);

        let title = match &db.book.card.short_title {
            Some(short) if !short.is_empty() => format!("{} [{}]", db.book.card.title, short),
            _ => db.book.card.title.clone(),
        };

        let fixed_width =
            left_prefix.width() + idx_str.width() + right_suffix.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let title_display = truncate_to_width(&title, available);
        let padding = available.saturating_sub(title_display.width());

        let idx_colored = match db.index {
            DisplayIndex::Available(_) => idx_str.normal(),
            DisplayIndex::Draft(_) => idx_str.dimmed(),
            DisplayIndex::Lost(_) => idx_str.red(),
        };

        println!(
            "{}{}{}{}{}{}",
            left_prefix,
            idx_colored,
            title_display,
            " ".repeat(padding),
            right_suffix,
            released_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_released_ago(date_release: Option<NaiveDate>) -> String {
    let Some(date) = date_release else {
        return format!("{:>width$}", "unreleased", width = TIME_WIDTH);
    };

    let today = Local::now().date_naive();
    let duration = (today - date).to_std().unwrap_or_default();
    let time_str = timeago::Formatter::new().convert(duration);

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
