/// Which identifier/syntax tables the scanner consults.
///
/// Targets below `Es2015` use the ES5 `ID_Start`/`ID_Continue` tables; the
/// classifier in `tsfe_syntax` branches on this, not on a parser flag,
/// because it is a property of the unicode tables, not of the grammar.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ScriptTarget {
    Es5,
    Es2015,
    Es2016,
    Es2017,
    Es2018,
    Es2019,
    Es2020,
    Es2021,
    Es2022,
    EsNext,
}

impl ScriptTarget {
    #[inline]
    pub fn uses_es5_identifier_tables(self) -> bool {
        self == Self::Es5
    }
}

impl Default for ScriptTarget {
    fn default() -> Self {
        Self::EsNext
    }
}

/// Surface syntax dialect: does `<` start JSX?
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum LanguageVariant {
    Standard,
    Jsx,
}

/// Whether the file is parsed as an ECMAScript module (`import`/`export` and
/// top-level `await` allowed) or a classic script.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ModuleKind {
    Script,
    Module,
}

/// The four "what kind of file is this" axes a parse is configured by.
///
/// This is deliberately a single value type (not four separate parameters)
/// because `script_kind` determines `language_variant` and `module_kind`
/// defaults; see [`SourceType::from_script_kind`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ScriptKind {
    /// `.ts`
    Ts,
    /// `.tsx`
    Tsx,
    /// A `.ts` declaration file, `.d.ts`
    TsDefinition,
    /// `.js`
    Js,
    /// `.jsx`
    Jsx,
    /// `.json`
    Json,
    /// Externally supplied text with no file extension to infer from.
    External,
}

impl ScriptKind {
    #[inline]
    pub fn is_typescript(self) -> bool {
        matches!(self, Self::Ts | Self::Tsx | Self::TsDefinition)
    }

    #[inline]
    pub fn is_typescript_definition(self) -> bool {
        self == Self::TsDefinition
    }

    #[inline]
    pub fn is_javascript(self) -> bool {
        matches!(self, Self::Js | Self::Jsx)
    }

    #[inline]
    pub fn is_jsx(self) -> bool {
        matches!(self, Self::Tsx | Self::Jsx)
    }

    #[inline]
    pub fn is_json(self) -> bool {
        self == Self::Json
    }

    /// Infer a [`ScriptKind`] from a file name's extension; `.d.ts` is
    /// detected specially since it changes ambient-context defaults.
    pub fn from_path(path: &str) -> Self {
        if path.ends_with(".d.ts") || path.ends_with(".d.mts") || path.ends_with(".d.cts") {
            return Self::TsDefinition;
        }
        match path.rsplit('.').next() {
            Some("ts" | "mts" | "cts") => Self::Ts,
            Some("tsx") => Self::Tsx,
            Some("jsx") => Self::Jsx,
            Some("json") => Self::Json,
            Some("mjs" | "cjs" | "js") => Self::Js,
            _ => Self::External,
        }
    }
}

impl Default for ScriptKind {
    fn default() -> Self {
        Self::Ts
    }
}

/// Full parser configuration: language dialect, JSX support, module-ness,
/// and the identifier-table target.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SourceType {
    script_kind: ScriptKind,
    module_kind: ModuleKind,
    target: ScriptTarget,
}

impl SourceType {
    pub fn from_script_kind(script_kind: ScriptKind) -> Self {
        let module_kind =
            if script_kind.is_json() { ModuleKind::Script } else { ModuleKind::Module };
        Self { script_kind, module_kind, target: ScriptTarget::default() }
    }

    #[must_use]
    pub fn with_module_kind(mut self, module_kind: ModuleKind) -> Self {
        self.module_kind = module_kind;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: ScriptTarget) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_typescript(mut self, is_typescript: bool) -> Self {
        self.script_kind = match (is_typescript, self.script_kind.is_jsx()) {
            (true, true) => ScriptKind::Tsx,
            (true, false) => ScriptKind::Ts,
            (false, true) => ScriptKind::Jsx,
            (false, false) => ScriptKind::Js,
        };
        self
    }

    #[must_use]
    pub fn with_jsx(mut self, is_jsx: bool) -> Self {
        self.script_kind = match (self.script_kind.is_typescript(), is_jsx) {
            (true, true) => ScriptKind::Tsx,
            (true, false) => ScriptKind::Ts,
            (false, true) => ScriptKind::Jsx,
            (false, false) => ScriptKind::Js,
        };
        self
    }

    #[inline]
    pub fn script_kind(self) -> ScriptKind {
        self.script_kind
    }

    #[inline]
    pub fn module_kind(self) -> ModuleKind {
        self.module_kind
    }

    #[inline]
    pub fn target(self) -> ScriptTarget {
        self.target
    }

    #[inline]
    pub fn is_typescript(self) -> bool {
        self.script_kind.is_typescript()
    }

    #[inline]
    pub fn is_typescript_definition(self) -> bool {
        self.script_kind.is_typescript_definition()
    }

    #[inline]
    pub fn is_javascript(self) -> bool {
        self.script_kind.is_javascript()
    }

    #[inline]
    pub fn is_jsx(self) -> bool {
        self.script_kind.is_jsx()
    }

    #[inline]
    pub fn is_json(self) -> bool {
        self.script_kind.is_json()
    }

    #[inline]
    pub fn is_module(self) -> bool {
        self.module_kind == ModuleKind::Module
    }

    #[inline]
    pub fn language_variant(self) -> LanguageVariant {
        if self.script_kind.is_jsx() { LanguageVariant::Jsx } else { LanguageVariant::Standard }
    }

    /// Construct a [`SourceType`] from a file name, the way a CLI or build
    /// tool would given only a path.
    pub fn from_path(path: &str) -> Self {
        Self::from_script_kind(ScriptKind::from_path(path))
    }
}

impl Default for SourceType {
    fn default() -> Self {
        Self::from_script_kind(ScriptKind::default())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_path_infers_kind() {
        assert_eq!(SourceType::from_path("a.ts").script_kind(), ScriptKind::Ts);
        assert_eq!(SourceType::from_path("a.tsx").script_kind(), ScriptKind::Tsx);
        assert_eq!(SourceType::from_path("a.d.ts").script_kind(), ScriptKind::TsDefinition);
        assert_eq!(SourceType::from_path("a.jsx").script_kind(), ScriptKind::Jsx);
        assert_eq!(SourceType::from_path("a.json").script_kind(), ScriptKind::Json);
    }

    #[test]
    fn jsx_implies_jsx_variant() {
        assert_eq!(SourceType::from_path("a.tsx").language_variant(), LanguageVariant::Jsx);
        assert_eq!(SourceType::from_path("a.ts").language_variant(), LanguageVariant::Standard);
    }

    #[test]
    fn definition_file_is_typescript() {
        let ty = SourceType::from_path("a.d.ts");
        assert!(ty.is_typescript());
        assert!(ty.is_typescript_definition());
    }
}
