use clap::Parser;
use docxside_template::{ConverterSettings, FontDefaults};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docxside-template",
    about = "Show the page geometry and typography defaults of a DOCX template"
)]
struct Args {
    /// Template DOCX file (defaults to the built-in blank document)
    template: Option<PathBuf>,
    /// Keep the theme's minor font and the styles' default size
    #[arg(long)]
    trust_theme: bool,
}

fn trust_theme_from_env() -> bool {
    std::env::var("DOCXSIDE_TRUST_THEME")
        .map(|v| !v.is_empty() && v != "0")
        .unwrap_or(false)
}

fn print_settings(settings: &ConverterSettings) {
    let page = &settings.page;
    println!(
        "page width:     {} twips / {} EMU",
        page.width.twips(),
        settings.page_width_emus().emus()
    );
    if let Some(height) = page.height {
        println!(
            "page height:    {} twips / {} EMU",
            height.twips(),
            height.to_emus().emus()
        );
    }
    println!(
        "margin left:    {} twips / {} EMU",
        page.margin_left.twips(),
        settings.page_margin_left_emus().emus()
    );
    println!(
        "margin right:   {} twips / {} EMU",
        page.margin_right.twips(),
        settings.page_margin_right_emus().emus()
    );
    println!("major font:     {:?}", settings.major_latin_font);
    println!("minor font:     {:?}", settings.minor_latin_font);
    println!("font size:      {}pt", settings.default_font_size.points());
    println!("block margin:   {}", settings.default_block_content_margin);
    println!("spacing:        {}", settings.default_spacing.to_xml());
    println!("table spacing:  {}", settings.default_spacing_in_tables.to_xml());
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let font_defaults = if args.trust_theme || trust_theme_from_env() {
        FontDefaults::TrustTheme
    } else {
        FontDefaults::ForceLiteral
    };

    let result = match &args.template {
        Some(path) => {
            if !path.is_file() {
                eprintln!("Error: not a file: {}", path.display());
                std::process::exit(1);
            }
            docxside_template::settings_from_template_file(path, font_defaults)
        }
        None => docxside_template::blank_document()
            .and_then(|bytes| docxside_template::settings_from_template_with(bytes, font_defaults)),
    };

    match result {
        Ok(settings) => print_settings(&settings),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
