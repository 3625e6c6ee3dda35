//! Format context for tracking state during recursive evaluation.

use crate::interpreter::EvalError;
use crate::types::Value;

/// Default limit on nested category expansions.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Evaluation state carried through one `format` call.
///
/// The context tracks:
/// - The positional arguments and the cursor into them, shared by the
///   top-level template and every nested category so arguments are consumed
///   exactly once, left to right
/// - Categories being expanded, for cycle detection
/// - Recursion depth for limiting deep recursion
#[derive(Debug)]
pub struct FormatContext<'a> {
    args: &'a [Value],
    /// Index of the next argument to hand out.
    next: usize,
    /// Categories being expanded, with the cursor at the time they started.
    call_stack: Vec<(String, usize)>,
    max_depth: usize,
}

impl<'a> FormatContext<'a> {
    /// Create new context over `args`.
    pub fn new(args: &'a [Value]) -> Self {
        Self::with_max_depth(args, DEFAULT_MAX_DEPTH)
    }

    /// Create context with custom max depth.
    pub fn with_max_depth(args: &'a [Value], max_depth: usize) -> Self {
        Self {
            args,
            next: 0,
            call_stack: Vec::new(),
            max_depth,
        }
    }

    /// Take the next argument, advancing the cursor.
    pub fn next_arg(&mut self) -> Result<&'a Value, EvalError> {
        let args = self.args;
        let value = args.get(self.next).ok_or(EvalError::ArgumentOutOfRange {
            index: self.next,
            available: args.len(),
        })?;
        self.next += 1;
        Ok(value)
    }

    /// Number of arguments consumed so far.
    pub fn consumed(&self) -> usize {
        self.next
    }

    /// Number of arguments not yet consumed.
    pub fn remaining(&self) -> usize {
        self.args.len() - self.next
    }

    /// Push a category expansion onto the stack.
    ///
    /// Expanding a category is a function of its name and the argument
    /// cursor, so meeting the same pair twice on the stack can never
    /// terminate. Returns error if:
    /// - Maximum depth exceeded
    /// - Cycle detected (same name already expanding at the same cursor)
    pub fn push_call(&mut self, name: &str) -> Result<(), EvalError> {
        if self.call_stack.len() >= self.max_depth {
            return Err(EvalError::MaxDepthExceeded);
        }
        let cursor = self.next;
        if self
            .call_stack
            .iter()
            .any(|(active, at)| active == name && *at == cursor)
        {
            let mut chain: Vec<String> = self
                .call_stack
                .iter()
                .map(|(active, _)| active.clone())
                .collect();
            chain.push(name.to_string());
            return Err(EvalError::CyclicReference { chain });
        }
        self.call_stack.push((name.to_string(), cursor));
        Ok(())
    }

    /// Pop a category expansion from the stack.
    pub fn pop_call(&mut self) {
        self.call_stack.pop();
    }

    /// Get current recursion depth.
    pub fn depth(&self) -> usize {
        self.call_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_are_handed_out_in_order() {
        let args = [Value::from("a"), Value::from(2)];
        let mut ctx = FormatContext::new(&args);
        assert_eq!(ctx.next_arg().unwrap(), &Value::from("a"));
        assert_eq!(ctx.next_arg().unwrap(), &Value::from(2));
        assert_eq!(ctx.consumed(), 2);
        assert_eq!(ctx.remaining(), 0);
        assert_eq!(
            ctx.next_arg(),
            Err(EvalError::ArgumentOutOfRange {
                index: 2,
                available: 2
            })
        );
    }

    #[test]
    fn same_name_after_consuming_is_not_a_cycle() {
        let args = [Value::from("x")];
        let mut ctx = FormatContext::new(&args);
        ctx.push_call("list").unwrap();
        ctx.next_arg().unwrap();
        ctx.push_call("list").unwrap();
        assert_eq!(ctx.depth(), 2);
        assert!(matches!(
            ctx.push_call("list"),
            Err(EvalError::CyclicReference { .. })
        ));
    }

    #[test]
    fn depth_limit_is_enforced() {
        let mut ctx = FormatContext::with_max_depth(&[], 1);
        ctx.push_call("a").unwrap();
        assert_eq!(ctx.push_call("b"), Err(EvalError::MaxDepthExceeded));
        ctx.pop_call();
        assert_eq!(ctx.depth(), 0);
    }
}
