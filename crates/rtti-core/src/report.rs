//! Line-oriented rendering of type descriptors.
//!
//! One routine per metadata category, each writing human-readable lines to
//! the underlying writer. The output is not a stable schema; members render
//! in the declaration order of their metadata table.

use crate::descriptor::{FieldInfo, ParamInfo, TypeInfo};
use crate::error::Result;
use crate::mirror::Mirror;
use std::io::Write;

pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn banner(&mut self, title: &str) -> Result<()> {
        writeln!(self.out, "============== {} ===============", title)?;
        Ok(())
    }

    /// Simple name of the type's direct superclass.
    pub fn superclass(&mut self, info: &TypeInfo) -> Result<()> {
        self.banner("Super Class")?;
        if let Some(superclass) = &info.superclass {
            writeln!(self.out, "Super class name: {}", superclass.simple)?;
        }
        Ok(())
    }

    /// Fully-qualified names of the interfaces the type declares.
    pub fn interfaces(&mut self, info: &TypeInfo) -> Result<()> {
        self.banner("Interfaces")?;
        for interface in &info.interfaces {
            writeln!(self.out, "Interface name: {}", interface.qualified)?;
        }
        Ok(())
    }

    pub fn constructors(&mut self, info: &TypeInfo) -> Result<()> {
        self.banner("Constructors")?;
        for constructor in &info.constructors {
            writeln!(self.out, "Constructor name: {}", constructor.name)?;
            writeln!(self.out, "Constructor modifier: {}", constructor.modifiers)?;
            writeln!(
                self.out,
                "Constructor parameters count: {}",
                constructor.param_count()
            )?;
            self.parameters(&constructor.params)?;
        }
        Ok(())
    }

    pub fn methods(&mut self, info: &TypeInfo) -> Result<()> {
        self.banner("Methods")?;
        for method in &info.methods {
            writeln!(self.out, "Method name: {}", method.name)?;
            writeln!(self.out, "Method return type: {}", method.return_type.simple)?;
            writeln!(self.out, "Method modifier: {}", method.modifiers)?;
            writeln!(self.out, "Method parameters count: {}", method.param_count())?;
            self.parameters(&method.params)?;
            writeln!(self.out, "================================")?;
        }
        Ok(())
    }

    /// Type-only view of the declared fields.
    pub fn fields(&mut self, info: &TypeInfo) -> Result<()> {
        self.banner("Fields")?;
        for field in &info.fields {
            self.field_header(field)?;
        }
        Ok(())
    }

    /// Instance view of the declared fields: annotations and types as in
    /// [`Reporter::fields`], plus the current value read through the
    /// visibility override. A denied override aborts the whole routine.
    pub fn fields_with_values(&mut self, mirror: &Mirror<'_>) -> Result<()> {
        self.banner("Fields")?;
        for field in &mirror.type_info().fields {
            self.field_header(field)?;
            let mut field_mirror = mirror.field(&field.name)?;
            field_mirror.set_accessible(true)?;
            writeln!(self.out, "Field value: {}", field_mirror.get()?)?;
        }
        Ok(())
    }

    /// The full canned report over one instance, in the original order:
    /// values first, then the five type-view sections.
    pub fn full_report(&mut self, mirror: &Mirror<'_>) -> Result<()> {
        self.fields_with_values(mirror)?;
        let info = mirror.type_info();
        self.superclass(info)?;
        self.constructors(info)?;
        self.interfaces(info)?;
        self.methods(info)?;
        self.fields(info)?;
        Ok(())
    }

    fn field_header(&mut self, field: &FieldInfo) -> Result<()> {
        for annotation in &field.annotations {
            writeln!(self.out, "Field annotation: {}", annotation)?;
        }
        writeln!(self.out, "Field name: {}", field.name)?;
        writeln!(self.out, "Field type: {}", field.ty.simple)?;
        Ok(())
    }

    fn parameters(&mut self, params: &[ParamInfo]) -> Result<()> {
        for param in params {
            // Quirk kept from the original output contract: the "name" line
            // carries the parameter's simple type name.
            writeln!(self.out, "    Parameter name: {}", param.ty.simple)?;
            writeln!(self.out, "    Parameter type: {}", param.ty.qualified)?;
        }
        Ok(())
    }
}
