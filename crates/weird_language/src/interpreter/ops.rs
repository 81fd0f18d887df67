//! Op executors.
//!
//! Arguments have already been shape-checked by the validator; the
//! accessors below still return errors instead of panicking on a malformed
//! command so that a hand-built program cannot crash the interpreter.

use weird_foundation::{Error, ErrorKind, Kind, Name, Result, Value};

use super::{EachLoop, Flow, Interpreter};
use crate::op::Op;
use crate::output::OutputSink;

impl Op {
    /// Executes this op with `args` against `interp`.
    pub(crate) fn execute<O: OutputSink>(
        self,
        interp: &mut Interpreter<'_, O>,
        args: &[Value],
    ) -> Result<Flow> {
        match self {
            Self::Noop | Self::Label => {}
            Self::Put => {
                let value = interp.deref(arg(args, 0)?)?;
                interp.emit(&value.to_string())?;
            }
            Self::Set => {
                let value = interp.deref(arg(args, 1)?)?;
                interp.memory_mut().set(ident(args, 0)?.clone(), value)?;
            }
            Self::LocalSet => {
                let value = interp.deref(arg(args, 1)?)?;
                interp
                    .memory_mut()
                    .local_set(ident(args, 0)?.clone(), value)?;
            }
            Self::PushFrame => interp.memory_mut().push_frame(),
            Self::PopFrame => interp.memory_mut().pop_frame()?,
            Self::Jmp => return Ok(interp.jump(ident(args, 0)?)),
            Self::Exit => return Ok(Flow::Halt(0)),
            Self::SetTrap => interp.set_trap(ident(args, 0)?.clone(), None),
            Self::ReturnToTrap => return interp.return_to_trap(ident(args, 0)?),
            Self::TrappedJmp => {
                let label = ident(args, 0)?;
                interp.set_trap(label.clone(), None);
                return Ok(interp.jump(label));
            }
            Self::VecPush => vec_push(interp, args)?,
            Self::Each => return each(interp, args),
            Self::Add => add(interp, args)?,
        }
        Ok(Flow::Continue)
    }
}

fn vec_push<O: OutputSink>(interp: &mut Interpreter<'_, O>, args: &[Value]) -> Result<()> {
    let target = ident(args, 0)?;
    let value = interp.deref(arg(args, 1)?)?;

    let slot = interp.memory_mut().get_mut(target)?;
    let actual = slot.kind();
    slot.as_vector_mut()
        .ok_or_else(|| not_a_vector(target, actual))?
        .push_back(value);
    Ok(())
}

fn each<O: OutputSink>(interp: &mut Interpreter<'_, O>, args: &[Value]) -> Result<Flow> {
    let item = ident(args, 0)?;
    let target = arg(args, 1)?;
    let body = ident(args, 2)?;
    let escape = ident(args, 3)?;

    let items = match interp.deref(target)? {
        Value::Vector(items) => items,
        other => return Err(not_a_vector(&target.to_string(), other.kind())),
    };

    interp.memory_mut().push_frame();
    EachLoop::new(item.clone(), items, body.clone(), escape.clone()).step(interp)
}

fn add<O: OutputSink>(interp: &mut Interpreter<'_, O>, args: &[Value]) -> Result<()> {
    let a = interp.deref(arg(args, 0)?)?;
    let b = interp.deref(arg(args, 1)?)?;
    let output = ident(args, 2)?;

    let sum = add_values(a, b)?;
    interp.memory_mut().set(output.clone(), sum)
}

/// Adds two values of the same kind.
///
/// Integers use checked addition, floats add, vectors concatenate. Characters
/// have no addition.
pub(crate) fn add_values(a: Value, b: Value) -> Result<Value> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => x
            .checked_add(y)
            .map(Value::Int)
            .ok_or_else(|| Error::new(ErrorKind::IntegerOverflow)),
        (Value::Float(x), Value::Float(y)) => Ok(Value::Float(x + y)),
        (Value::Vector(mut x), Value::Vector(y)) => {
            x.append(y);
            Ok(Value::Vector(x))
        }
        (a, b) if a.kind() == b.kind() => {
            Err(Error::new(ErrorKind::UnsupportedOperands(a.kind())))
        }
        (a, b) => Err(Error::new(ErrorKind::OperandMismatch {
            left: a.kind(),
            right: b.kind(),
        })),
    }
}

fn arg(args: &[Value], index: usize) -> Result<&Value> {
    args.get(index)
        .ok_or_else(|| Error::internal(format!("missing argument {index}")))
}

fn ident(args: &[Value], index: usize) -> Result<&Name> {
    arg(args, index)?
        .as_ident()
        .ok_or_else(|| Error::internal(format!("argument {index} is not an identifier")))
}

fn not_a_vector(name: &str, actual: Kind) -> Error {
    Error::new(ErrorKind::NotAVector {
        name: name.to_string(),
        actual,
    })
}
