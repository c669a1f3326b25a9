//! `import`/`export` declarations, spec §5.8, plus `import =` / `export =`
//! (the TypeScript-only CommonJS-interop forms). Reached only from
//! [`Parser::parse_statement`]'s `Kind::Import`/`Kind::Export` arms, since
//! both keywords can also start an expression (`import(...)`,
//! `import.meta`) or, for `export`, only ever start a declaration.

use tsfe_span::Span;
use tsfe_ast::{
    BindingIdentifier, Declaration, Expression, ExportAllDeclaration, ExportDefaultDeclaration,
    ExportDefaultDeclarationKind, ExportNamedDeclaration, ExportSpecifier, ImportAttribute,
    ImportDeclaration, ImportDeclarationSpecifier, ImportDefaultSpecifier, ImportKind,
    ImportNamespaceSpecifier, ImportSpecifier, NodeArray, Statement, StringLiteral,
    TsExportAssignment, TsImportEqualsDeclaration, TsModuleReference,
};

use crate::kind::Kind;
use crate::list::ParsingContext;
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_import_declaration_statement(&mut self, start: u32) -> Statement<'a> {
        self.bump_any();

        if self.at(Kind::StringLiteral) {
            let source = self.parse_string_literal();
            let attributes = self.parse_optional_import_attributes();
            self.asi();
            return Statement::Declaration(self.ast.alloc(Declaration::ImportDeclaration(self.ast.alloc(
                ImportDeclaration {
                    span: self.end_span(start),
                    specifiers: self.ast.missing_node_array(self.token.start()),
                    source,
                    import_kind: ImportKind::Value,
                    attributes,
                },
            ))));
        }

        let import_kind = if self.at_contextual("type")
            && self.lookahead(|p| {
                p.bump_any();
                !p.at(Kind::Comma) && !p.at_contextual("from")
            }) {
            self.bump_any();
            ImportKind::Type
        } else {
            ImportKind::Value
        };

        if self.at_identifier_name() && !self.at_contextual("from") {
            let id = self.parse_binding_identifier();
            if self.eat(Kind::Eq) {
                return self.parse_import_equals_rest(start, id, false);
            }
            return self.parse_import_clause_rest(start, import_kind, Some(id));
        }

        self.parse_import_clause_rest(start, import_kind, None)
    }

    /// `id =` has already been consumed; `is_export` is `true` for `export
    /// import X = ...`, which reuses this same module-reference grammar.
    fn parse_import_equals_rest(
        &mut self,
        start: u32,
        id: BindingIdentifier<'a>,
        is_export: bool,
    ) -> Statement<'a> {
        let module_reference = if self.at_contextual("require")
            && self.lookahead(|p| {
                p.bump_any();
                p.at(Kind::LParen)
            }) {
            self.bump_any();
            self.expect(Kind::LParen);
            let source = self.parse_string_literal();
            self.expect(Kind::RParen);
            TsModuleReference::ExternalModuleReference(source)
        } else {
            TsModuleReference::EntityName(self.parse_entity_name())
        };
        self.asi();
        Statement::Declaration(self.ast.alloc(Declaration::TsImportEqualsDeclaration(self.ast.alloc(
            TsImportEqualsDeclaration { span: self.end_span(start), id, is_export, module_reference },
        ))))
    }

    fn parse_import_clause_rest(
        &mut self,
        start: u32,
        import_kind: ImportKind,
        default_id: Option<BindingIdentifier<'a>>,
    ) -> Statement<'a> {
        let specifiers_start = self.start_span();
        let mut specifiers = self.ast.new_vec();
        if let Some(id) = default_id {
            specifiers.push(ImportDeclarationSpecifier::Default(ImportDefaultSpecifier {
                span: id.span,
                local: id,
            }));
            if self.eat(Kind::Comma) {
                self.parse_import_namespace_or_named_specifiers(&mut specifiers);
            }
        } else {
            self.parse_import_namespace_or_named_specifiers(&mut specifiers);
        }
        let specifiers_span = self.end_span(specifiers_start);

        if !self.eat_contextual("from") {
            self.unexpected();
        }
        let source = self.parse_string_literal();
        let attributes = self.parse_optional_import_attributes();
        self.asi();
        Statement::Declaration(self.ast.alloc(Declaration::ImportDeclaration(self.ast.alloc(ImportDeclaration {
            span: self.end_span(start),
            specifiers: self.ast.node_array(specifiers_span, specifiers),
            source,
            import_kind,
            attributes,
        }))))
    }

    fn parse_import_namespace_or_named_specifiers(
        &mut self,
        specifiers: &mut tsfe_allocator::Vec<'a, ImportDeclarationSpecifier<'a>>,
    ) {
        if self.eat(Kind::Star) {
            self.eat_contextual("as");
            let local = self.parse_binding_identifier();
            specifiers.push(ImportDeclarationSpecifier::Namespace(ImportNamespaceSpecifier {
                span: local.span,
                local,
            }));
            return;
        }
        let start = self.start_span();
        self.expect(Kind::LCurly);
        let opening = Span::new(start, self.prev_token_end);
        let named = self.parse_delimited_list(ParsingContext::ImportOrExportSpecifiers, Kind::RCurly, |p| {
            p.parse_import_specifier()
        });
        self.expect_closing(Kind::RCurly, opening);
        for specifier in named.iter() {
            specifiers.push(ImportDeclarationSpecifier::Named(specifier.clone()));
        }
    }

    fn parse_import_specifier(&mut self) -> ImportSpecifier<'a> {
        let start = self.start_span();
        let import_kind = if self.at_contextual("type")
            && self.lookahead(|p| {
                p.bump_any();
                p.at_identifier_name() && !matches!(p.cur_kind(), Kind::Comma | Kind::RCurly)
            }) {
            self.bump_any();
            ImportKind::Type
        } else {
            ImportKind::Value
        };
        let imported = self.parse_identifier_name();
        let local = if self.eat_contextual("as") {
            self.parse_binding_identifier()
        } else {
            BindingIdentifier { span: imported.span, name: imported.name }
        };
        ImportSpecifier { span: self.end_span(start), imported, local, import_kind }
    }

    /// `with { ... }` (and the legacy `assert { ... }` spelling) on an
    /// import/re-export. Only identifier-named keys are supported; a
    /// quoted-string attribute key (`with { "content-type": "..." }`) is
    /// rare enough in practice to leave as a follow-up.
    fn parse_optional_import_attributes(&mut self) -> NodeArray<'a, ImportAttribute<'a>> {
        if !self.eat_contextual("with") && !self.eat_contextual("assert") {
            return self.ast.missing_node_array(self.token.start());
        }
        let start = self.start_span();
        self.expect(Kind::LCurly);
        let opening = Span::new(start, self.prev_token_end);
        let attributes = self.parse_delimited_list(ParsingContext::AssertEntries, Kind::RCurly, |p| {
            p.parse_import_attribute()
        });
        self.expect_closing(Kind::RCurly, opening);
        attributes
    }

    fn parse_import_attribute(&mut self) -> ImportAttribute<'a> {
        let start = self.start_span();
        let key = self.parse_identifier_name();
        self.expect(Kind::Colon);
        let value = self.parse_string_literal();
        ImportAttribute { span: self.end_span(start), key, value }
    }

    fn parse_string_literal(&mut self) -> StringLiteral<'a> {
        if !self.at(Kind::StringLiteral) {
            self.error_expected(Kind::StringLiteral);
            return StringLiteral {
                span: Span::empty(self.token.start()),
                value: tsfe_allocator::String::from_str_in("", self.allocator),
                raw: "",
            };
        }
        let Expression::StringLiteral(lit) = self.parse_string_literal_expression() else {
            unreachable!("guarded by at(Kind::StringLiteral)")
        };
        *lit
    }

    pub(crate) fn parse_export_statement(&mut self, start: u32) -> Statement<'a> {
        self.bump_any();

        if self.eat(Kind::Default) {
            return self.parse_export_default_declaration(start);
        }

        if self.eat(Kind::Eq) {
            let expression = self.parse_assignment_expression();
            self.asi();
            return Statement::Declaration(self.ast.alloc(Declaration::TsExportAssignment(self.ast.alloc(
                TsExportAssignment { span: self.end_span(start), expression },
            ))));
        }

        if self.at(Kind::Import) {
            self.bump_any();
            let id = self.parse_binding_identifier();
            self.expect(Kind::Eq);
            return self.parse_import_equals_rest(start, id, true);
        }

        if self.eat(Kind::Star) {
            return self.parse_export_all_declaration(start, ImportKind::Value);
        }

        if self.at(Kind::LCurly) {
            return self.parse_export_named_specifiers(start, ImportKind::Value);
        }

        if self.ts_enabled()
            && self.at_contextual("type")
            && self.lookahead(|p| {
                p.bump_any();
                p.at(Kind::LCurly) || p.at(Kind::Star)
            })
        {
            self.bump_any();
            if self.eat(Kind::Star) {
                return self.parse_export_all_declaration(start, ImportKind::Type);
            }
            return self.parse_export_named_specifiers(start, ImportKind::Type);
        }

        // `export <declaration>`: every declaration form `export` can
        // prefix (`function`, `class`, `const`/`let`/`var`, `interface`,
        // `enum`, `type`, `namespace`/`module`, `declare ...`, decorated
        // classes, `async function`, `abstract class`) is already a
        // `parse_statement` arm.
        let declaration = self.parse_statement();
        Statement::Declaration(self.ast.alloc(Declaration::ExportNamedDeclaration(self.ast.alloc(
            ExportNamedDeclaration {
                span: self.end_span(start),
                declaration: Some(declaration),
                specifiers: self.ast.missing_node_array(self.token.start()),
                source: None,
                export_kind: ImportKind::Value,
            },
        ))))
    }

    fn parse_export_default_declaration(&mut self, start: u32) -> Statement<'a> {
        let is_async = self.at_contextual("async")
            && self.lookahead(|p| {
                p.bump_any();
                !p.cur_token().has_preceding_line_break() && p.at(Kind::Function)
            });
        if is_async {
            self.bump_any();
        }
        let declaration = if self.at(Kind::Function) {
            ExportDefaultDeclarationKind::Function(self.parse_function_core(start, is_async))
        } else if self.at(Kind::Class)
            || (self.at_contextual("abstract") && self.lookahead(|p| {
                p.bump_any();
                p.at(Kind::Class)
            }))
        {
            let decorators = self.ast.missing_node_array(start);
            ExportDefaultDeclarationKind::Class(self.parse_class_declaration(start, decorators, false))
        } else if self.ts_enabled() && self.at(Kind::Interface) {
            let Declaration::TsInterfaceDeclaration(iface) = self.parse_interface_declaration(start) else {
                unreachable!("parse_interface_declaration always returns TsInterfaceDeclaration")
            };
            ExportDefaultDeclarationKind::TsInterfaceDeclaration((*iface).clone())
        } else {
            let expr = self.parse_assignment_expression();
            self.asi();
            ExportDefaultDeclarationKind::Expression(expr)
        };
        Statement::Declaration(self.ast.alloc(Declaration::ExportDefaultDeclaration(self.ast.alloc(
            ExportDefaultDeclaration { span: self.end_span(start), declaration },
        ))))
    }

    fn parse_export_all_declaration(&mut self, start: u32, export_kind: ImportKind) -> Statement<'a> {
        let exported = if self.eat_contextual("as") { Some(self.parse_identifier_name()) } else { None };
        if !self.eat_contextual("from") {
            self.unexpected();
        }
        let source = self.parse_string_literal();
        self.asi();
        Statement::Declaration(self.ast.alloc(Declaration::ExportAllDeclaration(self.ast.alloc(
            ExportAllDeclaration { span: self.end_span(start), exported, source, export_kind },
        ))))
    }

    fn parse_export_named_specifiers(&mut self, start: u32, export_kind: ImportKind) -> Statement<'a> {
        let lcurly_start = self.start_span();
        self.expect(Kind::LCurly);
        let opening = Span::new(lcurly_start, self.prev_token_end);
        let specifiers = self.parse_delimited_list(ParsingContext::ImportOrExportSpecifiers, Kind::RCurly, |p| {
            p.parse_export_specifier()
        });
        self.expect_closing(Kind::RCurly, opening);
        let source = if self.eat_contextual("from") { Some(self.parse_string_literal()) } else { None };
        self.asi();
        Statement::Declaration(self.ast.alloc(Declaration::ExportNamedDeclaration(self.ast.alloc(
            ExportNamedDeclaration {
                span: self.end_span(start),
                declaration: None,
                specifiers,
                source,
                export_kind,
            },
        ))))
    }

    fn parse_export_specifier(&mut self) -> ExportSpecifier<'a> {
        let start = self.start_span();
        let export_kind = if self.at_contextual("type")
            && self.lookahead(|p| {
                p.bump_any();
                p.at_identifier_name() && !matches!(p.cur_kind(), Kind::Comma | Kind::RCurly)
            }) {
            self.bump_any();
            ImportKind::Type
        } else {
            ImportKind::Value
        };
        let local = self.parse_identifier_name();
        let exported = if self.eat_contextual("as") { self.parse_identifier_name() } else { local };
        ExportSpecifier { span: self.end_span(start), local, exported, export_kind }
    }
}
