use clap::Parser;

// Generation parameters are compiled-in constants, so neither command takes
// options; parsing still rejects stray arguments and provides --help/--version.

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    help_template = "{author-with-newline}{name} {version} {about-section}\n {usage-heading} {usage} \n {all-args} {tab}"
)]
/// Scatter 100 spheres uniformly over the ground plane and print them as
/// comma-terminated JSON object lines (flat schema) on stdout
pub struct ScatterCli {}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    help_template = "{author-with-newline}{name} {version} {about-section}\n {usage-heading} {usage} \n {all-args} {tab}"
)]
/// Drop jittered spheres on a sparse ring-shaped grid and print them as
/// comma-terminated JSON object lines (nested schema) on stdout
pub struct GridCli {}
