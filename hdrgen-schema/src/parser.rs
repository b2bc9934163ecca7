//! API description loader.
//!
//! This module reads an XML API description into the typed entity records of
//! [`crate::types`] and [`crate::functions`]. Each entity kind is decoded
//! exactly once; later stages never look at raw XML again.

use crate::error::ParseError;
use crate::functions::{Argument, Function, ObjectDef};
use crate::resolve::TypeRef;
use crate::types::{
    BitmaskDef, ChainDirection, Constant, EnumDef, Extensibility, NamedValue, Schema, StructDef,
    StructMember, TypeDef, ValueTypeDef,
};
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};

/// Parses an XML API description from a string.
///
/// # Arguments
/// * `xml` - XML document content
///
/// # Returns
/// Loaded schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, the naming prefix is missing,
/// or an element lacks a required attribute.
pub fn parse_schema(xml: &str) -> Result<Schema, ParseError> {
    // Text is not trimmed: entity references split it into several events
    // and the whitespace around them is content.
    let mut reader = Reader::from_str(xml);

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => break,
            Ok(Event::Empty(_)) | Ok(Event::Eof) => {
                return Err(ParseError::structure("document has no content"));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let schema = parse_root(&mut reader)?;

    tracing::debug!(
        prefix = %schema.prefix,
        constants = schema.constants.len(),
        types = schema.types.len(),
        free_functions = schema.free_functions.len(),
        function_pointers = schema.function_pointers.len(),
        objects = schema.objects.len(),
        "loaded API description"
    );

    Ok(schema)
}

/// Parses the children of the root element.
fn parse_root(reader: &mut Reader<&[u8]>) -> Result<Schema, ParseError> {
    let mut schema = Schema::default();
    let mut prefix = None;

    for_each_child(reader, |reader, e, empty| {
        match tag_name(e)?.as_str() {
            "license" => schema.license = read_text(reader, empty)?.trim().to_string(),
            "metadata" => {
                if let Some(p) = parse_metadata(reader, empty)? {
                    prefix = Some(p);
                }
            }
            "defines" => parse_defines(reader, empty, &mut schema)?,
            "types" => parse_types(reader, empty, &mut schema)?,
            "free_functions" => schema.free_functions = parse_functions(reader, empty)?,
            "function_pointers" => schema.function_pointers = parse_functions(reader, empty)?,
            "objects" => parse_objects(reader, empty, &mut schema)?,
            _ => return Ok(false),
        }
        Ok(true)
    })?;

    schema.prefix = prefix
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ParseError::structure("missing metadata/prefix/c"))?;

    Ok(schema)
}

/// Parses `metadata`, returning the C naming prefix if present.
fn parse_metadata(reader: &mut Reader<&[u8]>, empty: bool) -> Result<Option<String>, ParseError> {
    let mut prefix = None;
    if empty {
        return Ok(prefix);
    }

    for_each_child(reader, |reader, e, empty| {
        if tag_name(e)? != "prefix" {
            return Ok(false);
        }
        if !empty {
            for_each_child(reader, |reader, e, empty| {
                if tag_name(e)? != "c" {
                    return Ok(false);
                }
                prefix = Some(read_text(reader, empty)?.trim().to_string());
                Ok(true)
            })?;
        }
        Ok(true)
    })?;

    Ok(prefix)
}

/// Parses the `defines` section.
fn parse_defines(
    reader: &mut Reader<&[u8]>,
    empty: bool,
    schema: &mut Schema,
) -> Result<(), ParseError> {
    if empty {
        return Ok(());
    }

    for_each_child(reader, |reader, e, empty| {
        if tag_name(e)? != "define" {
            return Ok(false);
        }
        schema.constants.push(parse_define(e)?);
        skip_children(reader, empty)?;
        Ok(true)
    })
}

/// Parses a single constant definition.
fn parse_define(e: &BytesStart<'_>) -> Result<Constant, ParseError> {
    let mut name = None;
    let mut type_name = None;
    let mut value = None;

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let unescaped = attr.unescape_value()?;
        let attr_value = unescaped.as_ref();

        match key {
            "name" => name = Some(attr_value.to_string()),
            "type" => type_name = Some(attr_value.to_string()),
            "value" => value = Some(attr_value.to_string()),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("define", "name"))?;
    let type_name = type_name.ok_or_else(|| ParseError::missing_attr("define", "type"))?;
    let value = value.ok_or_else(|| ParseError::missing_attr("define", "value"))?;

    Ok(Constant::new(name, TypeRef::resolve(&type_name), value))
}

/// Parses the `types` section.
fn parse_types(
    reader: &mut Reader<&[u8]>,
    empty: bool,
    schema: &mut Schema,
) -> Result<(), ParseError> {
    if empty {
        return Ok(());
    }

    for_each_child(reader, |reader, e, empty| {
        let type_def = match tag_name(e)?.as_str() {
            "value" => {
                let value = parse_value_type(e)?;
                skip_children(reader, empty)?;
                TypeDef::Value(value)
            }
            "enum" => {
                let mut def = EnumDef::new(required_name(e, "enum")?);
                def.values = parse_named_values(reader, empty)?;
                TypeDef::Enum(def)
            }
            "bitmask" => {
                let mut def = BitmaskDef::new(required_name(e, "bitmask")?);
                def.values = parse_named_values(reader, empty)?;
                TypeDef::Bitmask(def)
            }
            "struct" => TypeDef::Struct(parse_struct(reader, e, empty)?),
            _ => return Ok(false),
        };
        schema.add_type(type_def);
        Ok(true)
    })
}

/// Parses a value type definition.
fn parse_value_type(e: &BytesStart<'_>) -> Result<ValueTypeDef, ParseError> {
    let mut name = None;
    let mut underlying = None;

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let unescaped = attr.unescape_value()?;
        let value = unescaped.as_ref();

        match key {
            "name" => name = Some(value.to_string()),
            "type" => underlying = Some(TypeRef::resolve(value)),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("value", "name"))?;
    let underlying = underlying.ok_or_else(|| ParseError::missing_attr("value", "type"))?;

    Ok(ValueTypeDef::new(name, underlying))
}

/// Parses the `entry` children of an enum or bitmask, in document order.
fn parse_named_values(
    reader: &mut Reader<&[u8]>,
    empty: bool,
) -> Result<Vec<NamedValue>, ParseError> {
    let mut values = Vec::new();
    if empty {
        return Ok(values);
    }

    for_each_child(reader, |reader, e, empty| {
        if tag_name(e)? != "entry" {
            return Ok(false);
        }

        let mut name = None;
        let mut value = None;
        for attr in e.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?;
            let unescaped = attr.unescape_value()?;
            let attr_value = unescaped.as_ref();

            match key {
                "name" => name = Some(attr_value.to_string()),
                "value" => value = Some(attr_value.to_string()),
                _ => {}
            }
        }

        let name = name.ok_or_else(|| ParseError::missing_attr("entry", "name"))?;
        let value = value.ok_or_else(|| ParseError::missing_attr("entry", "value"))?;
        values.push(NamedValue::new(name, value));

        skip_children(reader, empty)?;
        Ok(true)
    })?;

    Ok(values)
}

/// Parses a structure definition.
fn parse_struct(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    empty: bool,
) -> Result<StructDef, ParseError> {
    let mut name = None;
    let mut extensible = Extensibility::None;

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let unescaped = attr.unescape_value()?;
        let value = unescaped.as_ref();

        match key {
            "name" => name = Some(value.to_string()),
            "extensible" => {
                extensible = Extensibility::parse(value)
                    .ok_or_else(|| ParseError::invalid_attr("struct", "extensible", value))?
            }
            _ => {}
        }
    }

    let mut def = StructDef::new(name.ok_or_else(|| ParseError::missing_attr("struct", "name"))?);
    def.extensible = extensible;

    if empty {
        return Ok(def);
    }

    for_each_child(reader, |reader, e, empty| {
        match tag_name(e)?.as_str() {
            "member" => {
                def.add_member(parse_member(e)?);
                skip_children(reader, empty)?;
            }
            "chained" => parse_chained(reader, e, empty, &mut def)?,
            "methods" => {
                for method in parse_functions(reader, empty)? {
                    def.add_method(method);
                }
            }
            _ => return Ok(false),
        }
        Ok(true)
    })?;

    Ok(def)
}

/// Parses a structure member.
fn parse_member(e: &BytesStart<'_>) -> Result<StructMember, ParseError> {
    let mut name = None;
    let mut type_ref = None;
    let mut annotation = None;
    let mut length = None;
    let mut default = None;
    let mut optional = false;

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let unescaped = attr.unescape_value()?;
        let value = unescaped.as_ref();

        match key {
            "name" => name = Some(value.to_string()),
            "type" => type_ref = Some(TypeRef::resolve(value)),
            "annotation" => annotation = Some(value.to_string()),
            "length" => length = Some(value.to_string()),
            "default" => default = Some(value.to_string()),
            "optional" => optional = parse_bool("member", "optional", value)?,
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("member", "name"))?;
    let type_ref = type_ref.ok_or_else(|| ParseError::missing_attr("member", "type"))?;

    let mut member = StructMember::new(name, type_ref);
    member.annotation = annotation;
    member.length = length;
    member.default = default;
    member.optional = optional;

    Ok(member)
}

/// Parses the `chained` element of a structure.
fn parse_chained(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    empty: bool,
    def: &mut StructDef,
) -> Result<(), ParseError> {
    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let unescaped = attr.unescape_value()?;
        let value = unescaped.as_ref();

        if key == "dir" {
            def.chained = ChainDirection::parse(value)
                .ok_or_else(|| ParseError::invalid_attr("chained", "dir", value))?;
        }
    }

    if empty {
        return Ok(());
    }

    for_each_child(reader, |reader, e, empty| {
        if tag_name(e)? != "root" {
            return Ok(false);
        }
        def.chain_roots.push(required_name(e, "root")?);
        skip_children(reader, empty)?;
        Ok(true)
    })
}

/// Parses the `object` children of the `objects` section.
fn parse_objects(
    reader: &mut Reader<&[u8]>,
    empty: bool,
    schema: &mut Schema,
) -> Result<(), ParseError> {
    if empty {
        return Ok(());
    }

    for_each_child(reader, |reader, e, empty| {
        if tag_name(e)? != "object" {
            return Ok(false);
        }

        let mut name = None;
        let mut refcounted = false;
        for attr in e.attributes() {
            let attr = attr?;
            let key = std::str::from_utf8(attr.key.as_ref())?;
            let unescaped = attr.unescape_value()?;
            let value = unescaped.as_ref();

            match key {
                "name" => name = Some(value.to_string()),
                "refcounted" => refcounted = parse_bool("object", "refcounted", value)?,
                _ => {}
            }
        }

        let mut object =
            ObjectDef::new(name.ok_or_else(|| ParseError::missing_attr("object", "name"))?);
        object.refcounted = refcounted;

        if !empty {
            for_each_child(reader, |reader, e, empty| {
                if tag_name(e)? != "methods" {
                    return Ok(false);
                }
                for method in parse_functions(reader, empty)? {
                    object.add_method(method);
                }
                Ok(true)
            })?;
        }

        schema.objects.push(object);
        Ok(true)
    })
}

/// Parses a list of `function` children.
///
/// Free functions, function pointers, structure methods and object methods
/// all go through here.
fn parse_functions(reader: &mut Reader<&[u8]>, empty: bool) -> Result<Vec<Function>, ParseError> {
    let mut functions = Vec::new();
    if empty {
        return Ok(functions);
    }

    for_each_child(reader, |reader, e, empty| {
        if tag_name(e)? != "function" {
            return Ok(false);
        }
        functions.push(parse_function(reader, e, empty)?);
        Ok(true)
    })?;

    Ok(functions)
}

/// Parses a function and its arguments.
fn parse_function(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    empty: bool,
) -> Result<Function, ParseError> {
    let mut name = None;
    let mut returns = TypeRef::void();
    let mut is_async = false;
    let mut callback = None;

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let unescaped = attr.unescape_value()?;
        let value = unescaped.as_ref();

        match key {
            "name" => name = Some(value.to_string()),
            "returns" => returns = TypeRef::resolve(value),
            "async" => is_async = parse_bool("function", "async", value)?,
            "callback" => callback = Some(TypeRef::resolve(value)),
            _ => {}
        }
    }

    let mut func = Function::new(name.ok_or_else(|| ParseError::missing_attr("function", "name"))?);
    func.returns = returns;
    func.is_async = is_async;
    func.callback = callback;

    if empty {
        return Ok(func);
    }

    for_each_child(reader, |reader, e, empty| {
        if tag_name(e)? != "arg" {
            return Ok(false);
        }
        func.add_arg(parse_argument(e)?);
        skip_children(reader, empty)?;
        Ok(true)
    })?;

    Ok(func)
}

/// Parses a function argument.
fn parse_argument(e: &BytesStart<'_>) -> Result<Argument, ParseError> {
    let mut name = None;
    let mut type_ref = None;
    let mut annotation = None;
    let mut length = None;
    let mut optional = false;
    let mut suppress_nullable = false;
    let mut default = None;

    for attr in e.attributes() {
        let attr = attr?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let unescaped = attr.unescape_value()?;
        let value = unescaped.as_ref();

        match key {
            "name" => name = Some(value.to_string()),
            "type" => type_ref = Some(TypeRef::resolve(value)),
            "annotation" => annotation = Some(value.to_string()),
            "length" => length = Some(value.to_string()),
            "optional" => optional = parse_bool("arg", "optional", value)?,
            "suppress_nullable" => {
                suppress_nullable = parse_bool("arg", "suppress_nullable", value)?
            }
            "default" => default = Some(value.to_string()),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| ParseError::missing_attr("arg", "name"))?;
    let type_ref = type_ref.ok_or_else(|| ParseError::missing_attr("arg", "type"))?;

    let mut arg = Argument::new(name, type_ref);
    arg.annotation = annotation;
    arg.length = length;
    arg.optional = optional;
    arg.suppress_nullable = suppress_nullable;
    arg.default = default;

    Ok(arg)
}

/// Calls `visit` for every child element of the element just opened, until
/// its end tag.
///
/// `visit` receives the child's start tag and whether it was self-closing,
/// and returns `false` for children it does not handle; those are skipped
/// with their whole subtree. A handled non-empty child must be consumed up
/// to its end tag by `visit`.
fn for_each_child<F>(reader: &mut Reader<&[u8]>, mut visit: F) -> Result<(), ParseError>
where
    F: FnMut(&mut Reader<&[u8]>, &BytesStart<'_>, bool) -> Result<bool, ParseError>,
{
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if !visit(reader, e, false)? {
                    skip_to_end(reader)?;
                }
            }
            Ok(Event::Empty(ref e)) => {
                visit(reader, e, true)?;
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => return Err(ParseError::structure("unexpected end of document")),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Reads the text content of the element just opened, up to its end tag.
fn read_text(reader: &mut Reader<&[u8]>, empty: bool) -> Result<String, ParseError> {
    let mut text = String::new();
    if empty {
        return Ok(text);
    }

    let mut buf = Vec::new();
    let mut depth = 0usize;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(ref t)) => text.push_str(&t.xml10_content()?),
            Ok(Event::CData(ref t)) => text.push_str(&t.xml10_content()?),
            Ok(Event::GeneralRef(ref r)) => text.push(resolve_reference(r)?),
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Ok(Event::Eof) => return Err(ParseError::structure("unexpected end of document")),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

/// Resolves a character reference or one of the predefined XML entities.
fn resolve_reference(r: &BytesRef<'_>) -> Result<char, ParseError> {
    if let Some(c) = r.resolve_char_ref()? {
        return Ok(c);
    }
    let name = r.decode()?;
    resolve_predefined_entity(&name)
        .and_then(|s| s.chars().next())
        .ok_or_else(|| ParseError::structure(format!("unknown entity reference '&{};'", name)))
}

/// Consumes the rest of a non-empty element that has no meaningful children.
fn skip_children(reader: &mut Reader<&[u8]>, empty: bool) -> Result<(), ParseError> {
    if empty { Ok(()) } else { skip_to_end(reader) }
}

/// Skips to the end of the current element.
fn skip_to_end(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => return Err(ParseError::structure("unexpected end of document")),
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Returns the tag name of an element.
fn tag_name(e: &BytesStart<'_>) -> Result<String, ParseError> {
    let name_bytes = e.name().as_ref().to_vec();
    Ok(std::str::from_utf8(&name_bytes)?.to_string())
}

/// Returns the `name` attribute of an element.
fn required_name(e: &BytesStart<'_>, element: &str) -> Result<String, ParseError> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"name" {
            return Ok(attr.unescape_value()?.into_owned());
        }
    }
    Err(ParseError::missing_attr(element, "name"))
}

/// Parses a boolean attribute value.
fn parse_bool(element: &str, attribute: &str, value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::invalid_attr(element, attribute, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<api>
    <license>Copyright 2024 Example Authors
SPDX-License-Identifier: MIT</license>
    <metadata>
        <prefix><c>WGPU</c></prefix>
    </metadata>
    <defines>
        <define name="WHOLE_SIZE" type="uint64_t" value="UINT64_MAX"/>
    </defines>
    <types>
        <value name="Bool" type="uint32_t"/>
        <enum name="PowerPreference">
            <entry name="LowPower" value="1"/>
            <entry name="HighPerformance" value="0x2"/>
        </enum>
        <bitmask name="BufferUsage">
            <entry name="MapRead" value="0"/>
            <entry name="MapWrite" value="1"/>
        </bitmask>
        <struct name="Extent3D">
            <member name="width" type="uint32_t"/>
            <member name="height" type="uint32_t" default="1"/>
        </struct>
        <struct name="TextureDescriptor" extensible="in">
            <member name="label" type="char" annotation="const *" optional="true"/>
            <member name="size" type="Extent3D"/>
            <member name="viewFormatCount" type="size_t"/>
            <member name="viewFormats" type="TextureFormat" annotation="const *" length="viewFormatCount"/>
            <methods>
                <function name="FreeMembers"/>
            </methods>
        </struct>
        <struct name="SurfaceSourceXlib">
            <chained dir="in">
                <root name="SurfaceDescriptor"/>
            </chained>
            <member name="window" type="uint64_t"/>
        </struct>
    </types>
    <free_functions>
        <function name="CreateInstance" returns="Instance">
            <arg name="descriptor" type="InstanceDescriptor" annotation="const *" optional="true"/>
        </function>
    </free_functions>
    <function_pointers>
        <function name="BufferMapCallback">
            <arg name="status" type="MapAsyncStatus"/>
            <arg name="userdata" type="void" annotation="*"/>
        </function>
    </function_pointers>
    <objects>
        <object name="Buffer" refcounted="true">
            <methods>
                <function name="MapAsync" async="true" callback="BufferMapCallback">
                    <arg name="mode" type="MapMode"/>
                    <arg name="offset" type="size_t"/>
                </function>
                <function name="GetSize" returns="uint64_t"/>
            </methods>
        </object>
        <object name="Surface"/>
    </objects>
</api>"#;

    #[test]
    fn test_parse_metadata_and_license() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");

        assert_eq!(schema.prefix, "WGPU");
        assert!(schema.license.starts_with("Copyright 2024"));
        assert!(schema.license.contains("SPDX-License-Identifier: MIT"));
    }

    #[test]
    fn test_parse_defines() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");

        assert_eq!(schema.constants.len(), 1);
        let whole = &schema.constants[0];
        assert_eq!(whole.name, "WHOLE_SIZE");
        assert_eq!(whole.value, "UINT64_MAX");
        assert_eq!(whole.type_ref, TypeRef::resolve("uint64_t"));
    }

    #[test]
    fn test_parse_types() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");

        assert!(schema.has_type("Bool"));
        assert!(schema.has_type("PowerPreference"));
        assert!(schema.has_type("BufferUsage"));
        assert!(schema.has_type("Extent3D"));

        let power = schema.enums().next().unwrap();
        let names: Vec<&str> = power.values.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["LowPower", "HighPerformance"]);
        assert_eq!(power.values[1].value, "0x2");

        let usage = schema.bitmasks().next().unwrap();
        assert_eq!(usage.values.len(), 2);
    }

    #[test]
    fn test_parse_struct_members_in_order() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");

        let desc = schema.get_struct("TextureDescriptor").unwrap();
        assert_eq!(desc.extensible, Extensibility::In);
        assert_eq!(desc.chained, ChainDirection::None);

        let names: Vec<&str> = desc.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["label", "size", "viewFormatCount", "viewFormats"]);

        let label = &desc.members[0];
        assert!(label.optional);
        assert_eq!(label.annotation.as_deref(), Some("const *"));
        assert_eq!(desc.members[3].length.as_deref(), Some("viewFormatCount"));
        assert!(desc.methods.contains_key("FreeMembers"));

        let extent = schema.get_struct("Extent3D").unwrap();
        assert_eq!(extent.members[1].default.as_deref(), Some("1"));
    }

    #[test]
    fn test_parse_chained_struct() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");

        let xlib = schema.get_struct("SurfaceSourceXlib").unwrap();
        assert_eq!(xlib.chained, ChainDirection::In);
        assert_eq!(xlib.chain_roots, vec!["SurfaceDescriptor".to_string()]);
        assert_eq!(xlib.members.len(), 1);
    }

    #[test]
    fn test_parse_functions() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");

        assert_eq!(schema.free_functions.len(), 1);
        let create = &schema.free_functions[0];
        assert_eq!(create.returns, TypeRef::reference("Instance"));
        assert!(create.args[0].optional);

        assert_eq!(schema.function_pointers.len(), 1);
        assert_eq!(schema.function_pointers[0].args.len(), 2);
    }

    #[test]
    fn test_parse_objects() {
        let schema = parse_schema(SIMPLE_SCHEMA).expect("Failed to parse schema");

        assert_eq!(schema.objects.len(), 2);
        let buffer = &schema.objects[0];
        assert!(buffer.refcounted);
        assert_eq!(buffer.methods.len(), 2);

        let map = &buffer.methods["MapAsync"];
        assert!(map.is_async);
        assert_eq!(map.callback, Some(TypeRef::reference("BufferMapCallback")));

        let surface = &schema.objects[1];
        assert!(!surface.refcounted);
        assert!(surface.methods.is_empty());
    }

    #[test]
    fn test_unknown_elements_are_skipped() {
        let xml = r#"<api>
    <metadata><prefix><c>XY</c><cpp>xy</cpp></prefix><version>3</version></metadata>
    <annotations><note><text>ignored</text></note></annotations>
    <types>
        <typedef name="Ignored"><child/></typedef>
        <value name="Flags" type="uint64_t"/>
    </types>
</api>"#;
        let schema = parse_schema(xml).expect("Failed to parse schema");
        assert_eq!(schema.prefix, "XY");
        assert_eq!(schema.types.len(), 1);
        assert!(schema.has_type("Flags"));
    }

    #[test]
    fn test_missing_prefix_is_error() {
        let xml = r#"<api><types><value name="Bool" type="uint32_t"/></types></api>"#;
        let result = parse_schema(xml);
        assert!(matches!(result, Err(ParseError::InvalidStructure { .. })));
    }

    #[test]
    fn test_missing_required_attribute() {
        let xml = r#"<api>
    <metadata><prefix><c>WGPU</c></prefix></metadata>
    <types><struct name="Color"><member name="r"/></struct></types>
</api>"#;
        let result = parse_schema(xml);
        assert!(matches!(
            result,
            Err(ParseError::MissingAttribute { ref element, ref attribute })
                if element == "member" && attribute == "type"
        ));
    }

    #[test]
    fn test_invalid_bool_attribute() {
        let xml = r#"<api>
    <metadata><prefix><c>WGPU</c></prefix></metadata>
    <objects><object name="Device" refcounted="maybe"/></objects>
</api>"#;
        let result = parse_schema(xml);
        assert!(matches!(result, Err(ParseError::InvalidAttribute { .. })));
    }

    #[test]
    fn test_malformed_xml_is_error() {
        let xml = r#"<api><metadata><prefix><c>WGPU</c></prefix></metadata><types></api>"#;
        assert!(parse_schema(xml).is_err());
    }

    #[test]
    fn test_empty_document_is_error() {
        assert!(parse_schema("").is_err());
        assert!(parse_schema("<api/>").is_err());
    }

    #[test]
    fn test_numeric_bool_is_invalid() {
        let xml = r#"<api>
    <metadata><prefix><c>WGPU</c></prefix></metadata>
    <free_functions><function name="Poll" async="1"/></free_functions>
</api>"#;
        assert!(matches!(
            parse_schema(xml),
            Err(ParseError::InvalidAttribute { ref value, .. }) if value == "1"
        ));
    }

    #[test]
    fn test_license_entities_resolved() {
        let xml = r#"<api>
    <license>Copyright Foo &amp; Bar &lt;dev@example.com&gt;
Tab&#x9;and &#65;&apos;s</license>
    <metadata><prefix><c>WGPU</c></prefix></metadata>
</api>"#;
        let schema = parse_schema(xml).expect("Failed to parse");
        assert_eq!(
            schema.license,
            "Copyright Foo & Bar <dev@example.com>\nTab\tand A's"
        );
    }

    #[test]
    fn test_attribute_values_unescaped() {
        let xml = r#"<api>
    <metadata><prefix><c>WGPU</c></prefix></metadata>
    <types>
        <struct name="Label">
            <member name="text" type="char" annotation="const *" default="&quot;x&quot;"/>
        </struct>
    </types>
</api>"#;
        let schema = parse_schema(xml).expect("Failed to parse");
        let label = schema.get_struct("Label").expect("Label not found");
        assert_eq!(label.members[0].default.as_deref(), Some("\"x\""));
    }

    #[test]
    fn test_duplicate_attribute_is_error() {
        let xml = r#"<api>
    <metadata><prefix><c>WGPU</c></prefix></metadata>
    <objects><object name="Device" name="Queue"/></objects>
</api>"#;
        assert!(matches!(parse_schema(xml), Err(ParseError::Attr(_))));
    }

    #[test]
    fn test_unknown_entity_is_error() {
        let xml = r#"<api>
    <license>&copy; Example</license>
    <metadata><prefix><c>WGPU</c></prefix></metadata>
</api>"#;
        assert!(matches!(
            parse_schema(xml),
            Err(ParseError::InvalidStructure { .. })
        ));
    }
}
