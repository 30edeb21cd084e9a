//! Fragment library and body scaffold
//!
//! The catalog of benchmark steps, plus the declaration, header and footer
//! templates that surround them. Everything here is static text parsed once
//! on first use and shared read-only.

use crate::error::TemplateError;
use crate::fragment::{Fragment, FragmentId};
use crate::params::ParameterMap;
use crate::template::Template;
use once_cell::sync::Lazy;

const FILL: &str = r"
      for C in 1 .. Items_Count loop
         {append}
      end loop;";

const COPY: &str = r"
      declare
         V_Copy : Container.{type}'Class := V2{copy};
         pragma Unreferenced (V_Copy);
      begin
         --  Measure the time before we destroy the copy
         Stdout.End_Test;{clear_copy}
      end;";

const CURSOR_LOOP_THRESHOLD: &str = r"
      It := V2.First;
      while {prefix}Has_Element (It) loop
         if {prefix}Element (It) <= 2 then
            Co := Co + 1;
         end if;
         It := {prefix}Next (It);
      end loop;";

const CURSOR_LOOP_PREDICATE: &str = r"
      It := V2.First;
      while {prefix}Has_Element (It) loop
         if Predicate ({prefix}Element (It)) then
            Co := Co + 1;
         end if;
         It := {prefix}Next (It);
      end loop;";

const FOR_OF_THRESHOLD: &str = r"
      for E of V2 loop
         if E <= 2 then
            Co := Co + 1;
         end if;
      end loop;";

const FOR_OF_PREDICATE: &str = r"
      for E of V2 loop
         if Predicate (E) then
            Co := Co + 1;
         end if;
      end loop;";

const COUNT_IF: &str = r"
      Co := Count_If (V2, Predicate'Access);";

const INDEXED_THRESHOLD: &str = r"
      for C in 1 .. Items_Count loop
         if V2 (C) <= 2 then
            Co := Co + 1;
         end if;
      end loop;";

const INDEXED_PREDICATE: &str = r"
      for C in 1 .. Items_Count loop
         if Predicate (V2 (C)) then
            Co := Co + 1;
         end if;
      end loop;";

const KEYED_INDEXED_PREDICATE: &str = r#"
      for C in 1 .. Items_Count loop
         if Predicate (V2 ("1")) then
            Co := Co + 1;
         end if;
      end loop;"#;

const FIND: &str = r"
      for C in 1 .. Items_Count loop
         if Predicate (V2{get}) then
            Co := Co + 1;
         end if;
      end loop;";

const DECLARATION: &str = r"
with Report; use Report;
pragma Style_Checks (Off);
procedure {test_name}
   (Stdout : not null access Output'Class);
";

const HEADER: &str = r#"
{withs}
pragma Style_Checks (Off);
pragma Warnings (Off, "unit * is not referenced");
with Perf_Support;  use Perf_Support;
with Ada.Finalization;
with Conts.Algorithms;
with Conts.Adaptors;
pragma Warnings (On, "unit * is not referenced");
procedure {test_name}
   (Stdout : not null access Output'Class)
is
   {instance}
   use Container;{adaptors}

   procedure Run (V2 : in out Container.{type});
   --  Force dynamic dispatching for the container (if relevant), as a
   --  a way to check we do not waste time there.

   procedure Run (V2 : in out Container.{type}) is
      It : Container.Cursor;
      Co : Natural;
   begin"#;

const FOOTER: &str = r#"
   end Run;

begin
   Stdout.Start_Container_Test
      ("{base}", "{definite}", "{nodes}", "{category}", {favorite});
   for C in 1 .. Repeat_Count loop
      declare
         V : Container.{type}{discriminant};
      begin
         Stdout.Save_Container_Size (V'Size / 8);  --  in bytes
         Run (V);{clear}
      end;
   end loop;
   Stdout.End_Container_Test;
end {test_name};
"#;

/// `(id, body, starts_group, has_expected_count)`
const CATALOG: [(FragmentId, &str, bool, bool); 11] = [
    (FragmentId::Fill, FILL, true, false),
    (FragmentId::Copy, COPY, false, false),
    (FragmentId::CursorLoopThreshold, CURSOR_LOOP_THRESHOLD, true, true),
    (FragmentId::CursorLoopPredicate, CURSOR_LOOP_PREDICATE, true, true),
    (FragmentId::ForOfThreshold, FOR_OF_THRESHOLD, false, true),
    (FragmentId::ForOfPredicate, FOR_OF_PREDICATE, false, true),
    (FragmentId::CountIf, COUNT_IF, false, true),
    (FragmentId::IndexedThreshold, INDEXED_THRESHOLD, false, true),
    (FragmentId::IndexedPredicate, INDEXED_PREDICATE, false, true),
    (FragmentId::KeyedIndexedPredicate, KEYED_INDEXED_PREDICATE, false, true),
    (FragmentId::Find, FIND, true, true),
];

static STANDARD: Lazy<FragmentLibrary> =
    Lazy::new(|| FragmentLibrary::build().expect("built-in fragments parse"));

static SCAFFOLD: Lazy<Scaffold> = Lazy::new(|| Scaffold::build().expect("built-in scaffold parses"));

/// Catalog of all benchmark steps
#[derive(Debug, Clone)]
pub struct FragmentLibrary {
    fragments: Vec<Fragment>,
}

impl FragmentLibrary {
    /// The built-in library
    #[inline]
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    fn build() -> Result<Self, TemplateError> {
        let fragments = CATALOG
            .iter()
            .map(|&(id, body, group, expected)| Fragment::new(id, body, group, expected))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { fragments })
    }

    /// Fragment for `id`
    #[must_use]
    pub fn get(&self, id: FragmentId) -> &Fragment {
        // CATALOG lists every id in `FragmentId::ALL` order.
        &self.fragments[id as usize]
    }

    /// All fragments in library order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments.iter()
    }

    /// Distinct step names, in library order
    #[must_use]
    pub fn step_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for fragment in &self.fragments {
            if !names.contains(&fragment.name()) {
                names.push(fragment.name());
            }
        }
        names
    }
}

/// Templates surrounding the fragments of one variant
#[derive(Debug, Clone)]
pub struct Scaffold {
    /// Declaration artifact
    pub declaration: Template,
    /// Body prologue, up to the start of `Run`
    pub header: Template,
    /// Body epilogue: end of `Run` and the repeat loop
    pub footer: Template,
}

impl Scaffold {
    /// The built-in scaffold
    #[inline]
    #[must_use]
    pub fn standard() -> &'static Self {
        &SCAFFOLD
    }

    fn build() -> Result<Self, TemplateError> {
        Ok(Self {
            declaration: Template::parse("declaration", DECLARATION)?,
            header: Template::parse("header", HEADER)?,
            footer: Template::parse("footer", FOOTER)?,
        })
    }

    /// Check the three templates against `params`
    ///
    /// # Errors
    /// Returns the first missing key, naming the template that needs it
    pub fn check(&self, params: &ParameterMap) -> Result<(), TemplateError> {
        self.declaration.check(params)?;
        self.header.check(params)?;
        self.footer.check(params)
    }
}
