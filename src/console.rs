// ─── Console front-end ───
// Line-oriented UI over `commands`. It owns the mapping from the numbered
// rows it prints to catalog ids; no pack logic lives here.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::{self, ModInfo};
use crate::core::catalog::{AddonId, AddonSummary};
use crate::core::error::{PackError, PackResult};
use crate::core::export::PackMetadata;
use crate::core::selection::FileChoices;
use crate::core::state::AppState;

const HELP: &str = "\
Commands:
  search <text>          search the catalog for mods
  add <n>                add result <n> of the last search (with dependencies)
  add-id <addon id>      add a mod by catalog id
  versions               list Minecraft versions
  mc <version>           choose the Minecraft version
  loader <n>             choose mod loader <n> from the last `mc` listing
  list                   show mods in the pack and their files
  select <mod n> <file n> choose a file for a mod (numbers from `list`)
  remove <mod n>         remove a mod from the pack
  name|version|author <text>  set pack details
  export                 write manifest.json and credits.html
  help                   show this text
  quit                   exit";

enum Flow {
    Continue,
    Quit,
}

pub struct Console {
    state: AppState,
    search_rows: Vec<AddonSummary>,
    mod_rows: Vec<AddonId>,
    loader_rows: Vec<String>,
}

impl Console {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            search_rows: Vec::new(),
            mod_rows: Vec::new(),
            loader_rows: Vec::new(),
        }
    }

    pub async fn run(mut self) -> PackResult<()> {
        println!("PackCrafter\n{}", HELP);

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        prompt();
        while let Some(line) = lines.next_line().await? {
            match self.handle(line.trim()).await {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => println!("Error: {}", e),
            }
            prompt();
        }

        Ok(())
    }

    async fn handle(&mut self, line: &str) -> PackResult<Flow> {
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "" => {}
            "help" => println!("{}", HELP),
            "quit" | "exit" => return Ok(Flow::Quit),
            "search" => {
                self.search_rows = commands::search_mods(&self.state, rest).await?;
                if self.search_rows.is_empty() {
                    println!("No mods found");
                }
                for (i, hit) in self.search_rows.iter().enumerate() {
                    println!("{:>3}. {} (#{})", i + 1, hit.name, hit.id);
                }
            }
            "add" => {
                let row = parse_row(rest, self.search_rows.len())?;
                let hit = self.search_rows[row].clone();
                let info = commands::add_mod(&mut self.state, hit).await?;
                println!("Added {} ({} mods in pack)", info.name, self.state.registry.len());
                self.refresh_mod_rows();
            }
            "add-id" => {
                let id: AddonId = rest
                    .parse()
                    .map_err(|_| PackError::Other(format!("Not an addon id: {}", rest)))?;
                let info = commands::add_mod_by_id(&mut self.state, id).await?;
                println!("Added {} ({} mods in pack)", info.name, self.state.registry.len());
                self.refresh_mod_rows();
            }
            "versions" => {
                let versions = commands::get_minecraft_versions(&self.state).await?;
                println!("{}", versions.join(", "));
            }
            "mc" => {
                let selection =
                    commands::select_minecraft_version(&mut self.state, rest.to_string()).await?;
                self.loader_rows = selection.loaders.iter().map(|l| l.version.clone()).collect();
                if selection.loaders.is_empty() {
                    println!("No available loader for this version of Minecraft");
                }
                for (i, loader) in selection.loaders.iter().enumerate() {
                    println!("{:>3}. {}", i + 1, loader.label);
                }
                if let Some(loader) = selection.selected_loader {
                    println!("Loader: {}", loader);
                }
            }
            "loader" => {
                let row = parse_row(rest, self.loader_rows.len())?;
                commands::select_loader_version(&mut self.state, self.loader_rows[row].clone());
            }
            "list" => {
                self.refresh_mod_rows();
                let mods = commands::list_pack_mods(&self.state);
                if mods.is_empty() {
                    println!("The pack is empty");
                }
                for (i, info) in mods.iter().enumerate() {
                    print_mod(i + 1, info);
                }
            }
            "select" => {
                let (mod_arg, file_arg) = rest.split_once(' ').unwrap_or((rest, ""));
                let addon_id = self.mod_row(mod_arg)?;
                let mods = commands::list_pack_mods(&self.state);
                let choices = mods
                    .iter()
                    .find(|m| m.id == addon_id)
                    .map(|m| m.choices.files().to_vec())
                    .unwrap_or_default();
                let row = parse_row(file_arg.trim(), choices.len())?;
                let info = commands::select_file(&mut self.state, addon_id, choices[row].file_id)?;
                println!("Set file for {} to {}", info.name, choices[row].file_name);
            }
            "remove" => {
                let addon_id = self.mod_row(rest)?;
                commands::remove_mod(&mut self.state, addon_id)?;
                self.refresh_mod_rows();
            }
            "name" | "version" | "author" => {
                let mut meta: PackMetadata = self.state.pack.clone();
                match command {
                    "name" => meta.name = rest.to_string(),
                    "version" => meta.version = rest.to_string(),
                    _ => meta.author = rest.to_string(),
                }
                commands::set_pack_metadata(&mut self.state, meta);
            }
            "export" => {
                let summary = commands::export_modpack(&self.state).await?;
                println!("Exported {} mods to {}", summary.mod_count, summary.pack_dir);
                if let Some(archive) = summary.archive {
                    println!("Archive: {}", archive);
                }
            }
            other => println!("Unknown command '{}', try `help`", other),
        }

        Ok(Flow::Continue)
    }

    fn refresh_mod_rows(&mut self) {
        self.mod_rows = self.state.registry.items().map(|(id, _)| id).collect();
    }

    fn mod_row(&self, arg: &str) -> PackResult<AddonId> {
        let row = parse_row(arg, self.mod_rows.len())?;
        Ok(self.mod_rows[row])
    }
}

/// 1-based row number to index.
fn parse_row(arg: &str, len: usize) -> PackResult<usize> {
    match arg.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= len => Ok(n - 1),
        _ => Err(PackError::Other(format!(
            "Expected a number between 1 and {}, got '{}'",
            len, arg
        ))),
    }
}

fn print_mod(row: usize, info: &ModInfo) {
    println!(
        "{:>3}. {} by {} [{}]",
        row,
        info.name,
        info.authors.join(", "),
        info.website_url
    );

    match &info.choices {
        FileChoices::NoMinecraftVersion => println!("       Select a version of Minecraft"),
        FileChoices::NoFiles => println!("       No files for this version of Minecraft"),
        FileChoices::Available(files) => {
            for (i, choice) in files.iter().enumerate() {
                let marker = if info.selected_file == Some(choice.file_id) {
                    '*'
                } else {
                    ' '
                };
                println!("     {}{:>2}) {}", marker, i + 1, choice.label);
            }
        }
    }

    for issue in &info.issues {
        println!("       ! {}", issue);
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
