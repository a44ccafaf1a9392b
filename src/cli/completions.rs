use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    resume-cms completions bash > ~/.bash_completion.d/resume-cms\n\n\
                  Generate zsh completions:\n    resume-cms completions zsh > ~/.zfunc/_resume-cms\n\n\
                  Generate fish completions:\n    resume-cms completions fish > ~/.config/fish/completions/resume-cms.fish\n\n\
                  Generate PowerShell completions:\n    resume-cms completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
