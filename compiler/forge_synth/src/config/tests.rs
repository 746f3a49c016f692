use super::*;
use forge_ir::StringInterner;
use pretty_assertions::assert_eq;

#[test]
fn default_config() {
    let config = SynthConfig::default();
    assert_eq!(config.setter_style, SetterStyle::Prefixed);
    assert!(config.bean_accessors);
    assert!(config.reuse_pool);
    assert_eq!(config.builder_suffix, "Builder");
}

#[test]
fn directives_override_session_settings() {
    let interner = StringInterner::new();
    let decl = ValueTypeDecl::new(interner.intern("Point"))
        .with_directive(Directive::NoReuseBuilders)
        .with_directive(Directive::PlainAccessors);

    let options = SynthConfig::default().options_for(&decl);
    assert_eq!(
        options,
        TypeOptions {
            setter_style: SetterStyle::Prefixed,
            bean_accessors: false,
            reuse_pool: false,
        }
    );
}

#[test]
fn directive_can_opt_back_in() {
    let interner = StringInterner::new();
    let decl = ValueTypeDecl::new(interner.intern("Point")).with_directive(Directive::ReuseBuilders);
    let config = SynthConfig {
        reuse_pool: false,
        ..SynthConfig::default()
    };
    assert!(config.options_for(&decl).reuse_pool);
}

#[test]
fn no_directives_matches_plain_options() {
    let interner = StringInterner::new();
    let decl = ValueTypeDecl::new(interner.intern("Point"));
    let config = SynthConfig {
        setter_style: SetterStyle::Fluent,
        ..SynthConfig::default()
    };
    assert_eq!(config.options_for(&decl), config.options());
}
