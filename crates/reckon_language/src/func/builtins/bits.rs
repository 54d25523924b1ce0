//! Bit packing and manipulation.
//!
//! Arguments are integer-valued numbers reinterpreted as 64-bit words;
//! results come back as signed numerics, the same reinterpretation the
//! bitwise operators use.

#![allow(clippy::cast_sign_loss, clippy::cast_precision_loss)]

use reckon_foundation::{Error, Result, Value};

use super::FuncDef;
use crate::eval::EvalContext;
use crate::op::num_from_bits;

pub(crate) fn defs() -> Result<Vec<FuncDef>> {
    Ok(vec![
        FuncDef::parse("pack(b, array[]...)", pack, "packs b-bit fields into one word")?,
        FuncDef::parse("unpack(b, x)", unpack, "splits a word into b-bit fields")?,
        FuncDef::parse("swapNib(x*)", swap_nib, "swaps the nibbles of each byte")?,
        FuncDef::parse("swap2(x*)", swap2, "swaps each pair of bytes")?,
        FuncDef::parse("count1(x*)", count1, "number of set bits")?,
        FuncDef::parse("xorReduce(x*)", xor_reduce, "XOR of all bits (parity)")?,
        FuncDef::parse("toGray(x*)", to_gray, "binary to Gray code")?,
        FuncDef::parse("fromGray(x*)", from_gray, "Gray code to binary")?,
        FuncDef::parse("rotateL(b, x*)", rotate_l, "rotates the low b bits left by one")?,
        FuncDef::parse("rotateR(b, x*)", rotate_r, "rotates the low b bits right by one")?,
    ])
}

fn word(value: &Value) -> Result<u64> {
    Ok(value.expect_int()? as u64)
}

/// Validates a field/rotation width: 1 through 64 bits.
fn width(value: &Value) -> Result<u32> {
    let b = value.expect_int()?;
    if !(1..=64).contains(&b) {
        return Err(Error::domain(format!("bit width out of range: {b}")));
    }
    Ok(b as u32)
}

fn mask(b: u32) -> u64 {
    if b == 64 { u64::MAX } else { (1u64 << b) - 1 }
}

fn pack(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let b = width(&args[0])?;
    let fields = args[1].expect_array()?;
    if fields.len() as u32 * b > 64 {
        return Err(Error::domain(format!(
            "pack: {} fields of {b} bits exceed 64",
            fields.len()
        )));
    }
    // First element lands in the most significant field.
    let mut acc = 0u64;
    for field in fields {
        acc = (acc << b) | (word(field)? & mask(b));
    }
    Ok(num_from_bits(acc))
}

fn unpack(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let b = width(&args[0])?;
    let x = word(&args[1])?;
    let count = 64 / b + u32::from(64 % b != 0);
    let mut fields = Vec::with_capacity(count as usize);
    for i in (0..count).rev() {
        fields.push(num_from_bits((x >> (i * b)) & mask(b)));
    }
    Ok(Value::array(fields))
}

fn swap_nib(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let x = word(&args[0])?;
    Ok(num_from_bits(
        ((x & 0x0f0f_0f0f_0f0f_0f0f) << 4) | ((x >> 4) & 0x0f0f_0f0f_0f0f_0f0f),
    ))
}

fn swap2(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let x = word(&args[0])?;
    Ok(num_from_bits(
        ((x & 0x00ff_00ff_00ff_00ff) << 8) | ((x >> 8) & 0x00ff_00ff_00ff_00ff),
    ))
}

fn count1(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(f64::from(word(&args[0])?.count_ones())))
}

fn xor_reduce(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    Ok(Value::Num(f64::from(word(&args[0])?.count_ones() & 1)))
}

fn to_gray(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let x = word(&args[0])?;
    Ok(num_from_bits(x ^ (x >> 1)))
}

fn from_gray(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let mut x = word(&args[0])?;
    let mut shift = 1;
    while shift < 64 {
        x ^= x >> shift;
        shift <<= 1;
    }
    Ok(num_from_bits(x))
}

fn rotate_l(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let b = width(&args[0])?;
    let x = word(&args[1])? & mask(b);
    Ok(num_from_bits(((x << 1) | (x >> (b - 1))) & mask(b)))
}

fn rotate_r(_ctx: &mut EvalContext<'_>, args: &[Value]) -> Result<Value> {
    let b = width(&args[0])?;
    let x = word(&args[1])? & mask(b);
    Ok(num_from_bits(((x >> 1) | (x << (b - 1))) & mask(b)))
}
