use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    shotsync completions bash > ~/.bash_completion.d/shotsync\n\n\
                  Generate zsh completions:\n    shotsync completions zsh > ~/.zfunc/_shotsync\n\n\
                  Generate fish completions:\n    shotsync completions fish > ~/.config/fish/completions/shotsync.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
