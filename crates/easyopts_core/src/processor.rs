//! Command-line processing: match tokens, coerce, validate, then assign.
//!
//! Processing is all-or-nothing. Every token is matched and coerced first,
//! then every supplied option is validated in section-then-registration
//! order, then required options are checked, and only then do assign
//! callbacks run (in the same order). Any failure before the assign phase
//! leaves the destination untouched.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::builtin::BuiltinAction;
use crate::error::{OptsError, OptsResult};
use crate::option::{Handler, RegisteredOption, Requiredness};
use crate::remaining::RemainingArgs;
use crate::section::Visibility;
use crate::store::{ProgramOptions, Slot};
use crate::value::Value;

/// Result of a successful [`ProgramOptions::process`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Processed {
    /// Tokens no option consumed.
    pub remaining: RemainingArgs,
    /// Built-in actions reached during the assign phase, in order.
    pub actions: Vec<BuiltinAction>,
    /// Number of distinct options found on the command line.
    pub supplied: usize,
}

impl Processed {
    /// Whether the assign phase stopped early at a terminating built-in.
    pub fn halted(&self) -> bool {
        self.actions.last().is_some_and(BuiltinAction::terminates)
    }
}

impl<T> ProgramOptions<T> {
    /// Process the store's own argument vector (program name skipped).
    pub fn process(&mut self, target: &mut T) -> OptsResult<Processed> {
        let args: Vec<String> = self.args.iter().skip(1).cloned().collect();
        self.process_args(&args, target)
    }

    /// Process `args`, which must not include the program name.
    pub fn process_args<S: AsRef<str>>(&mut self, args: &[S], target: &mut T) -> OptsResult<Processed> {
        self.enter_processed()?;

        let (supplied, remaining) = self.match_tokens(args)?;
        self.run_validators(&supplied)?;

        let help_requested = supplied.keys().any(|&slot| {
            matches!(self.option_at(slot).handler, Handler::Builtin(action) if action.terminates())
        });
        // A bare `--version` needs none of the host's required options
        let builtins_only = !supplied.is_empty()
            && supplied
                .keys()
                .all(|&slot| matches!(self.option_at(slot).handler, Handler::Builtin(_)));
        if !help_requested && !builtins_only {
            self.check_required(&supplied)?;
        }

        let count = supplied.len();
        let actions = self.run_assigns(supplied, target);
        info!(
            "Processed {} argument(s): {} option(s) supplied, {} remaining",
            args.len(),
            count,
            remaining.len()
        );
        Ok(Processed {
            remaining,
            actions,
            supplied: count,
        })
    }

    fn option_at(&self, (s, o): Slot) -> &RegisteredOption<T> {
        &self.sections[s].options[o]
    }

    fn match_tokens<S: AsRef<str>>(
        &self,
        args: &[S],
    ) -> OptsResult<(BTreeMap<Slot, Value>, RemainingArgs)> {
        let mut supplied = BTreeMap::new();
        let mut remaining = RemainingArgs::new();
        let mut next = 0;

        while next < args.len() {
            let token = args[next].as_ref();
            next += 1;

            if self.config.end_of_options && token == "--" {
                remaining.extend(args[next..].iter().map(|a| a.as_ref().to_string()));
                break;
            }

            let matched = if let Some(body) = token.strip_prefix("--") {
                let (name, inline) = match body.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (body, None),
                };
                self.long_index.get(name).map(|&slot| (slot, inline))
            } else if let Some(body) = token.strip_prefix('-') {
                let mut chars = body.chars();
                chars.next().and_then(|short| {
                    let rest = chars.as_str();
                    let inline = (!rest.is_empty()).then_some(rest);
                    self.short_index.get(&short).map(|&slot| (slot, inline))
                })
            } else {
                None
            };

            let Some((slot, inline)) = matched else {
                debug!("Unmatched argument kept: {}", token);
                remaining.push(token);
                continue;
            };

            let option = self.option_at(slot);
            let value = take_value(option, inline, args, &mut next)?;
            debug!("Matched --{} from '{}'", option.long, token);

            if supplied.insert(slot, value).is_some() && !self.config.allow_repeats {
                return Err(OptsError::RepeatedOption {
                    option: option.long.clone(),
                });
            }
        }

        Ok((supplied, remaining))
    }

    fn run_validators(&mut self, supplied: &BTreeMap<Slot, Value>) -> OptsResult<()> {
        for (&(s, o), value) in supplied {
            let section = &mut self.sections[s];
            if section.visibility == Visibility::Deprecated {
                warn!("Option --{} belongs to deprecated section {}", section.options[o].long, section.name);
            }
            let option = &mut section.options[o];
            if let Some(validate) = option.validate.as_mut() {
                if !validate.validate(value) {
                    debug!("Validation rejected --{} = {}", option.long, value);
                    return Err(OptsError::ValidationFailed {
                        option: option.long.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    fn check_required(&self, supplied: &BTreeMap<Slot, Value>) -> OptsResult<()> {
        for (s, section) in self.sections.iter().enumerate() {
            for (o, option) in section.options.iter().enumerate() {
                if option.requiredness == Requiredness::Required && !supplied.contains_key(&(s, o)) {
                    return Err(OptsError::MissingRequired {
                        option: option.long.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    fn run_assigns(&mut self, supplied: BTreeMap<Slot, Value>, target: &mut T) -> Vec<BuiltinAction> {
        let mut actions = Vec::new();
        for ((s, o), value) in supplied {
            let option = &mut self.sections[s].options[o];
            match &mut option.handler {
                Handler::User(assign) => {
                    debug!("Assigning --{}", option.long);
                    assign.assign(&value, target);
                }
                Handler::Builtin(action) => {
                    actions.push(*action);
                    if action.terminates() {
                        debug!("Built-in --{} stops processing", option.long);
                        break;
                    }
                }
            }
        }
        actions
    }
}

/// Pull the value for `option` from the token itself or the next argument.
fn take_value<T, S: AsRef<str>>(
    option: &RegisteredOption<T>,
    inline: Option<&str>,
    args: &[S],
    next: &mut usize,
) -> OptsResult<Value> {
    if !option.requiredness.takes_value() {
        return match inline {
            Some(value) => Err(OptsError::UnexpectedValue {
                option: option.long.clone(),
                value: value.to_string(),
            }),
            None => Ok(Value::Flag),
        };
    }

    let raw = match inline {
        Some(value) => value,
        None => {
            let Some(value) = args.get(*next) else {
                return Err(OptsError::MissingValue {
                    option: option.long.clone(),
                });
            };
            *next += 1;
            value.as_ref()
        }
    };

    option.kind.coerce(raw).map_err(|reason| OptsError::Coercion {
        option: option.long.clone(),
        value: raw.to_string(),
        kind: option.kind.label().to_string(),
        reason,
    })
}
