//! Shared depth-first traversal driving format renderers.
//!
//! ```text
//! begin_document
//!   begin_group(color)
//!     token(color.primary)
//!     begin_group(color.text)
//!       token(color.text.body)
//!     end_group(color.text)
//!   end_group(color)
//!   token(opacity)
//! end_document
//! ```
//!
//! The root group is announced through the document hooks, never as a
//! group. Every token is visited exactly once, in insertion order.

use toki_core::{Node, Token, TokenError, TokenGroup, TokenPath, TokenResult, TokenTree};

/// Position of a node in the traversal.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    /// Full path of the node.
    pub path: &'a TokenPath,
    /// Key of the node within its parent.
    pub name: &'a str,
    /// Number of enclosing groups, excluding the root.
    pub depth: usize,
}

/// Format-specific rendering hooks.
///
/// Only [`token`](Renderer::token) and [`finish`](Renderer::finish) are
/// required; flat formats ignore groups entirely.
pub trait Renderer {
    /// Called once before anything else.
    fn begin_document(&mut self) {}

    /// Called when entering a group.
    fn begin_group(&mut self, _visit: &Visit<'_>) {}

    /// Called for every token. References never reach this hook.
    fn token(&mut self, visit: &Visit<'_>, token: &Token);

    /// Called when leaving a group.
    fn end_group(&mut self, _visit: &Visit<'_>) {}

    /// Called once after everything else.
    fn end_document(&mut self) {}

    /// Consumes the renderer, returning the output text.
    fn finish(self) -> TokenResult<String>
    where
        Self: Sized;
}

/// Drives `renderer` over `tree`.
///
/// # Errors
///
/// [`TokenError::UnresolvedAlias`] if a token still holds a reference.
pub fn walk<R: Renderer + ?Sized>(tree: &TokenTree, renderer: &mut R) -> TokenResult<()> {
    renderer.begin_document();
    walk_group(tree.root(), &TokenPath::root(), 0, renderer)?;
    renderer.end_document();
    Ok(())
}

fn walk_group<R: Renderer + ?Sized>(
    group: &TokenGroup,
    prefix: &TokenPath,
    depth: usize,
    renderer: &mut R,
) -> TokenResult<()> {
    for (name, node) in group.iter() {
        let path = prefix.child(name);
        let visit = Visit {
            path: &path,
            name,
            depth,
        };
        match node {
            Node::Token(token) => {
                if let Some(target) = token.value.reference() {
                    return Err(TokenError::unresolved_alias(path.clone(), target.clone()));
                }
                renderer.token(&visit, token);
            }
            Node::Group(child) => {
                renderer.begin_group(&visit);
                walk_group(child, &path, depth + 1, renderer)?;
                renderer.end_group(&visit);
            }
        }
    }
    Ok(())
}
