use std::cell::RefCell;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::rc::Rc;

use log::debug;
use lru::LruCache;
use serde_json::Value;

use crate::binding::path::BindingPath;
use crate::binding::template;
use crate::error::EngineError;
use crate::model::Element;

const PATH_CACHE_CAPACITY: usize = 256;

/// Read-only view of the runtime data plus the repeat scopes currently open.
///
/// Created fresh for each render pass. Parsed paths are memoized in an LRU
/// cache owned by this context, so repeated bindings of the same path across
/// a large tree parse once.
pub struct DataContext<'a> {
    base: &'a Value,
    scopes: Vec<HashMap<String, Value>>,
    path_cache: RefCell<LruCache<String, Rc<BindingPath>>>,
}

impl<'a> DataContext<'a> {
    pub fn new(base: &'a Value) -> Self {
        Self {
            base,
            scopes: Vec::new(),
            path_cache: RefCell::new(LruCache::new(
                NonZeroUsize::new(PATH_CACHE_CAPACITY).unwrap(),
            )),
        }
    }

    pub fn push_scope(&mut self, scope: HashMap<String, Value>) {
        self.scopes.push(scope);
    }

    pub fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    fn parsed(&self, raw: &str) -> Result<Rc<BindingPath>, EngineError> {
        let mut cache = self.path_cache.borrow_mut();
        if let Some(path) = cache.get(raw) {
            return Ok(Rc::clone(path));
        }
        let path = Rc::new(BindingPath::parse(raw)?);
        cache.put(raw.to_string(), Rc::clone(&path));
        Ok(path)
    }

    /// Resolve a path against the innermost scope that shadows its head
    /// key, falling back to the base data. Null and missing are both None.
    pub fn lookup(&self, raw: &str) -> Result<Option<Value>, EngineError> {
        let path = self.parsed(raw)?;
        if let Some(head) = path.head_key() {
            for scope in self.scopes.iter().rev() {
                if let Some(bound) = scope.get(head) {
                    if path.segments().len() == 1 {
                        return Ok(if bound.is_null() { None } else { Some(bound.clone()) });
                    }
                    return Ok(path.resolve_tail(bound).cloned());
                }
            }
        }
        Ok(path.resolve(self.base).cloned())
    }

    /// Content of one node, per the binding precedence: `format` wins,
    /// then `binding` with `bindingFallback` behind it, then the literal
    /// `value`.
    pub fn resolve_content(&self, element: &Element) -> Result<Option<Value>, EngineError> {
        if let Some(format) = &element.format {
            let text = template::resolve_template(self, format)?;
            return Ok(Some(Value::String(text)));
        }
        if let Some(binding) = &element.binding {
            if let Some(found) = self.lookup(binding)? {
                return Ok(Some(found));
            }
            debug!("binding '{}' missed on node '{}'", binding, element.id_or_unnamed());
            if let Some(fallback) = &element.binding_fallback {
                if let Some(found) = self.lookup(fallback)? {
                    return Ok(Some(found));
                }
                debug!("fallback '{}' missed on node '{}'", fallback, element.id_or_unnamed());
            }
            return Ok(element.value.clone());
        }
        Ok(element.value.clone())
    }
}
