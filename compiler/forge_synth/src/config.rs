//! Generation configuration.

use forge_ir::{Directive, ValueTypeDecl};

/// How primary setters are spelled.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum SetterStyle {
    /// `setName(..)`
    #[default]
    Prefixed,
    /// `name(..)`
    Fluent,
}

/// Session-wide generation settings.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct SynthConfig {
    pub setter_style: SetterStyle,
    /// Strip `get`/`is` from accessor names when deriving property names.
    pub bean_accessors: bool,
    /// Allow eligible builders into the per-thread reuse pool.
    pub reuse_pool: bool,
    /// Appended to the value type's name to form the builder's name.
    pub builder_suffix: String,
}

impl Default for SynthConfig {
    fn default() -> Self {
        SynthConfig {
            setter_style: SetterStyle::Prefixed,
            bean_accessors: true,
            reuse_pool: true,
            builder_suffix: "Builder".to_owned(),
        }
    }
}

impl SynthConfig {
    /// Settings with no directives applied.
    pub fn options(&self) -> TypeOptions {
        TypeOptions {
            setter_style: self.setter_style,
            bean_accessors: self.bean_accessors,
            reuse_pool: self.reuse_pool,
        }
    }

    /// Settings for one value type after applying its directives.
    ///
    /// Conflicting directives are rejected by validation before this runs; if
    /// both are present anyway the later one wins.
    pub fn options_for(&self, decl: &ValueTypeDecl) -> TypeOptions {
        let mut options = self.options();
        for usage in &decl.directives {
            match usage.directive {
                Directive::ReuseBuilders => options.reuse_pool = true,
                Directive::NoReuseBuilders => options.reuse_pool = false,
                Directive::BeanAccessors => options.bean_accessors = true,
                Directive::PlainAccessors => options.bean_accessors = false,
            }
        }
        options
    }
}

/// Effective settings for a single value type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeOptions {
    pub setter_style: SetterStyle,
    pub bean_accessors: bool,
    pub reuse_pool: bool,
}

impl Default for TypeOptions {
    fn default() -> Self {
        SynthConfig::default().options()
    }
}

#[cfg(test)]
mod tests;
