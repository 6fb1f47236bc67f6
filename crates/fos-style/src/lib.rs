//! fOS Style
//!
//! Chainable CSS helpers for element collections: inline style writes,
//! computed style reads, and class add/remove/test.
//!
//! # Example
//! ```rust,ignore
//! use fos_style::{Config, StyleMixin, StyleOperations};
//!
//! let mixin = StyleMixin::new(Config::default());
//! let mut styled = mixin.attach(tree.select(ids));
//! styled
//!     .css([("color", "red"), ("border", "1px solid blue")])
//!     .add_class("active")?
//!     .remove_class(Some("pending"))?;
//! let display = styled.get_style("display")?;
//! ```

mod cache;
mod operations;

pub use cache::ClassNameRegexCache;
pub use operations::{StyleOperations, Styled};

pub use fos_css::{ComputedStyleSource, StyleResolver, Stylesheet};
pub use fos_dom::{DomTree, ElementCollection, ElementData, NodeId};

/// Mixin configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Load the default user-agent stylesheet into the built-in resolver
    pub user_agent_styles: bool,

    /// Initial capacity of the class pattern cache
    pub class_cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent_styles: true,
            class_cache_capacity: 32,
        }
    }
}

/// Owner of the style capability
///
/// Holds the computed-style platform and the class pattern cache shared by
/// every collection it is attached to.
pub struct StyleMixin {
    config: Config,
    class_names: ClassNameRegexCache,
    computed: Box<dyn ComputedStyleSource>,
}

impl StyleMixin {
    /// Mixin backed by the built-in [`StyleResolver`]
    pub fn new(config: Config) -> Self {
        let resolver = if config.user_agent_styles {
            StyleResolver::new()
        } else {
            StyleResolver::without_ua_styles()
        };
        Self::with_source(config, resolver)
    }

    /// Mixin backed by a caller-provided computed-style source
    pub fn with_source(config: Config, source: impl ComputedStyleSource + 'static) -> Self {
        tracing::debug!("Style mixin created: {:?}", config);
        Self {
            class_names: ClassNameRegexCache::with_capacity(config.class_cache_capacity),
            computed: Box::new(source),
            config,
        }
    }

    /// Attach the style capability to a collection
    pub fn attach<'a>(&'a self, elements: ElementCollection<'a>) -> Styled<'a> {
        Styled::new(elements, self.computed.as_ref(), &self.class_names)
    }

    /// Class pattern cache
    pub fn class_names(&self) -> &ClassNameRegexCache {
        &self.class_names
    }

    /// Computed-style source
    pub fn source(&self) -> &dyn ComputedStyleSource {
        self.computed.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for StyleMixin {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl std::fmt::Debug for StyleMixin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleMixin")
            .field("config", &self.config)
            .field("class_names", &self.class_names)
            .finish_non_exhaustive()
    }
}

/// Style operation error
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("Cannot read {property:?} from an empty collection")]
    EmptyCollection { property: String },

    #[error("Class membership needs exactly one element, collection has {len}")]
    NotSingleton { len: usize },

    #[error("Invalid class name {class_name:?}: {source}")]
    InvalidClassName {
        class_name: String,
        #[source]
        source: regex::Error,
    },
}
