/*
MIT License

Copyright (c) 2025 Ritchie Mwewa

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use std::io::Read as _;
use std::process;

use boxtree::cli::args::Args;
use boxtree::cli::flags::ShowColour;
use boxtree::color::ColorRgb;
use boxtree::layout::compute_layout;
use boxtree::parsing::{self, detect_format};
use boxtree::scene::Scene;
use boxtree::tree_sprite::TreeSprite;
use boxtree::{config, terminal};
use clap::Parser;

/// Reads the tree's source text from `--input-file`, the positional
/// argument, or stdin, in that order of precedence — mirroring the
/// original three-way `read_input` dispatch.
fn read_input(args: &Args) -> Result<String, String> {
    if let Some(path) = &args.input_file {
        return std::fs::read_to_string(path).map_err(|err| format!("couldn't read '{}': {err}", path.display()));
    }

    if let Some(text) = &args.input {
        return Ok(text.clone());
    }

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text).map_err(|err| format!("couldn't read stdin: {err}"))?;
    Ok(text)
}

fn colour_enabled(setting: ShowColour) -> bool {
    match setting {
        ShowColour::Always => true,
        ShowColour::Never => false,
        ShowColour::Auto => terminal::is_tty(),
    }
}

fn main() {
    let args = Args::parse();

    let text = read_input(&args).unwrap_or_else(|message| {
        eprintln!("bt: {message}");
        process::exit(1);
    });

    let Some(format) = detect_format(&text) else {
        eprintln!("bt: couldn't detect a tree notation in the input");
        process::exit(1);
    };

    let parsed = parsing::parse(format, &text).unwrap_or_else(|errors| {
        for error in &errors {
            eprintln!("bt: {} (at byte {}, {} byte(s))", error.message, error.position, error.extent);
        }
        process::exit(1);
    });

    if parsed.tree.size() == 0 {
        return;
    }

    let config = config::load_config();
    let base_style = config::resolve_style(&args.style, &config).unwrap_or_else(|| {
        eprintln!("bt: unrecognized style '{}'", args.style);
        process::exit(1);
    });

    let mut style = args.apply_overrides(base_style);
    if !colour_enabled(args.colour) {
        style.text_color = ColorRgb::NONE;
        style.box_color = ColorRgb::NONE;
        style.branch_color = ColorRgb::NONE;
    }

    let layout = compute_layout(&parsed.tree, parsed.root, &parsed.node_labels, &parsed.edge_labels, &style);
    let tree_sprite = TreeSprite::new(&parsed.tree, parsed.root, &parsed.node_labels, &parsed.edge_labels, &layout);
    let scene = Scene::new(tree_sprite.into_sprite());

    print!("{}", scene.render(&style));
}
