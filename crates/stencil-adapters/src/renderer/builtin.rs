//! Built-in class skeletons with `{{VARIABLE}}` substitution.

use stencil_core::{
    application::ports::TemplateRenderer,
    domain::{GeneratedFile, RenderContext, ResolvedIdentity, SOURCE_EXTENSION, TemplateKey},
};
use tracing::instrument;

const CLASS_SKELETON: &str = r#"<?php

namespace {{NAMESPACE}};

use Artister\System\Collections\ArrayList;
use Artister\System\Linq;

class {{CLASS_NAME}}
{
    public function __construct()
    {
        // code...
    }
}
"#;

const CONTROLLER_SKELETON: &str = r#"<?php

namespace {{NAMESPACE}};

use Artister\Web\Mvc\Controller;
use Artister\Web\Mvc\IActionResult;

class {{CLASS_NAME}} extends Controller
{
    public function index() : IActionResult
    {
        return $this->view();
    }
}
"#;

// `__get` / `__set` are output text for the framework's property
// interception, not something stencil evaluates.
const ENTITY_SKELETON: &str = r#"<?php

namespace {{NAMESPACE}};

use Artister\Entity\IEntity;

class {{CLASS_NAME}} implements IEntity
{
    private int $Id;

    public function __get(string $name)
    {
        return $this->$name;
    }

    public function __set(string $name, $value)
    {
        $this->$name = $value;
    }
}
"#;

/// Renders the three built-in skeletons.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRenderer;

impl BuiltinRenderer {
    pub fn new() -> Self {
        Self
    }

    fn skeleton(key: TemplateKey) -> &'static str {
        match key {
            TemplateKey::Class => CLASS_SKELETON,
            TemplateKey::Controller => CONTROLLER_SKELETON,
            TemplateKey::Entity => ENTITY_SKELETON,
        }
    }
}

impl TemplateRenderer for BuiltinRenderer {
    #[instrument(skip_all, fields(template = %key, class = %identity.class_name))]
    fn render(&self, key: TemplateKey, identity: &ResolvedIdentity) -> GeneratedFile {
        let context = RenderContext::new(identity);
        let path = identity
            .destination_dir
            .join(format!("{}.{SOURCE_EXTENSION}", identity.class_name));

        GeneratedFile::new(path, context.render(Self::skeleton(key)))
    }
}
