//! A minimal illustration of a Monte Carlo style tree search loop: build a
//! tree, repeatedly descend at random to a leaf and propagate the leaf's
//! outcome back up the path, updating win/loss counters at every ancestor.
//!
//! - [`tree`] holds the [`Node`] data model and the randomized tree builder.
//! - [`search`] performs one descent-and-backpropagation pass per iteration.
//! - [`report`] reads the accumulated statistics back out in pre-order.
//!
//! ```
//! use mctree::{report, search, Node};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut root = Node::example();
//! search::run_iterations(&mut root, 10, &mut rng);
//!
//! assert_eq!(root.total(), 10);
//! assert_eq!(report::success_rates(Some(&root)).count(), root.size());
//! ```
//!
//! Note that this is deliberately *not* a full MCTS: there is no expansion,
//! no UCB selection and no simulation beyond the leaf's pre-baked validity
//! flag.

// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]
// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![deny(clippy::perf)]

pub mod report;
pub mod search;
pub mod tree;

use shadow_rs::shadow;
pub use tree::{Node, TreeConfig};

shadow!(build);

/// Returns the full crate version that can be used to identify how it was
/// built in the first place.
#[must_use]
pub fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Logs the version, build type and whether the build is clean.
pub fn log_build_info() {
    tracing::info!(
        version = %version(),
        release = !shadow_rs::is_debug(),
        "{} starting",
        build::PROJECT_NAME
    );
    if !shadow_rs::git_clean() {
        tracing::warn!("built with uncommitted changes");
    }
}
