//! The OpenCLI document outline

use std::sync::OnceLock;

use super::NavigationSection as S;

/// Root of the outline ("OpenCLI Document")
pub fn specification_structure() -> &'static S {
    static STRUCTURE: OnceLock<S> = OnceLock::new();
    STRUCTURE.get_or_init(build)
}

fn build() -> S {
    S::new("root", "OpenCLI Document")
        .description("Root-level properties of an OpenCLI specification")
        .children(vec![
            opencli(),
            info(),
            external_docs(),
            platforms(),
            environment(),
            tags(),
            commands(),
            components(),
        ])
}

fn opencli() -> S {
    S::new("opencli", "opencli")
        .required()
        .kind("string")
        .description("The version of the OpenCLI specification being used")
        .documentation(
            "Specifies which version of the OpenCLI specification your CLI tool follows. \
             Always place this as the first field in your YAML file.",
        )
        .example(r#"opencli: "1.0.0""#)
}

fn info() -> S {
    S::new("info", "info")
        .required()
        .kind("object")
        .description("Metadata about the CLI tool")
        .documentation("Core metadata that identifies your CLI tool to users and package managers.")
        .example(
            r#"info:
  title: "Open Command-Line Interface Specification"
  description: "Standard for defining command-line interfaces"
  version: "1.0.0"
  contact:
    name: "OpenCLI Working Group"
    url: "https://github.com/openclispec/open-cli-specification"
  license:
    name: "Apache 2.0"
    url: "https://www.apache.org/licenses/LICENSE-2.0""#,
        )
        .children(vec![
            S::new("info-title", "title")
                .required()
                .kind("string")
                .description("The title of the CLI application")
                .documentation(
                    "Human-readable name of your CLI application (used in help text and documentation).",
                )
                .example("info:\n  title: \"Open Command-Line Interface Specification\""),
            S::new("info-description", "description")
                .kind("string")
                .description("A description of the CLI application")
                .documentation(
                    "Brief explanation of what your CLI tool does (appears in --help output).",
                )
                .example("info:\n  description: \"Standard for defining command-line interfaces\""),
            S::new("info-version", "version")
                .required()
                .kind("string")
                .description("The version of the CLI application")
                .documentation("Current version following semantic versioning (major.minor.patch).")
                .example("info:\n  version: \"1.0.0\""),
            S::new("info-contact", "contact")
                .kind("object")
                .description("Contact information for the CLI tool")
                .documentation("How users can reach you for support, bug reports, or contributions.")
                .example(
                    "info:\n  contact:\n    name: \"OpenCLI Working Group\"\n    url: \"https://github.com/openclispec/open-cli-specification\"",
                )
                .children(vec![
                    S::new("contact-name", "name")
                        .kind("string")
                        .description("The name of the contact person/organization")
                        .documentation("Maintainer name or organization responsible for the CLI tool.")
                        .example("contact:\n  name: \"OpenCLI Working Group\""),
                    S::new("contact-url", "url")
                        .kind("string")
                        .description("The URL pointing to the contact information")
                        .documentation("Primary support channel (GitHub issues, website, etc.).")
                        .example(
                            "contact:\n  url: \"https://github.com/openclispec/open-cli-specification\"",
                        ),
                    S::new("contact-email", "email")
                        .kind("string")
                        .description("The email address of the contact person/organization")
                        .documentation("Direct email for urgent issues or security reports.")
                        .example("contact:\n  email: \"team@opencli.org\""),
                ]),
            S::new("info-license", "license")
                .kind("object")
                .description("License information for the CLI tool")
                .documentation("Legal terms under which your CLI tool is distributed.")
                .example(
                    "info:\n  license:\n    name: \"Apache 2.0\"\n    url: \"https://www.apache.org/licenses/LICENSE-2.0\"",
                )
                .children(vec![
                    S::new("license-name", "name")
                        .kind("string")
                        .description("The name of the license")
                        .documentation("SPDX license identifier (e.g., MIT, Apache-2.0, GPL-3.0).")
                        .example("license:\n  name: \"Apache 2.0\""),
                    S::new("license-url", "url")
                        .kind("string")
                        .description("A URL to the license used for the CLI tool")
                        .documentation("Full license text location for legal compliance.")
                        .example("license:\n  url: \"https://www.apache.org/licenses/LICENSE-2.0\""),
                ]),
        ])
}

fn external_docs() -> S {
    S::new("externalDocs", "externalDocs")
        .kind("object")
        .description("Links to external documentation")
        .documentation("Links to comprehensive guides, tutorials, and API documentation.")
        .example(
            "externalDocs:\n  description: \"Find out more about OpenCLI\"\n  url: \"https://www.openclispec.com\"",
        )
        .children(vec![
            S::new("externaldocs-description", "description")
                .kind("string")
                .description("A description of the external documentation")
                .documentation("Brief summary of what the external documentation contains.")
                .example("externalDocs:\n  description: \"Find out more about OpenCLI\""),
            S::new("externaldocs-url", "url")
                .kind("string")
                .description("The URL for the external documentation")
                .documentation("Direct link to comprehensive guides and documentation.")
                .example("externalDocs:\n  url: \"https://www.openclispec.com\""),
        ])
}

fn platforms() -> S {
    S::new("platforms", "platforms")
        .kind("array")
        .description("Supported platforms and architectures")
        .documentation("OS-specific configurations for Windows, macOS, and Linux distributions.")
        .example(
            r#"platforms:
  - name: "linux"
    architectures:
      - "amd64"
      - "arm64"
  - name: "darwin"
    architectures:
      - "amd64"
      - "arm64"
  - name: "windows"
    architectures:
      - "amd64"
      - "arm64""#,
        )
        .children(vec![
            S::new("platform-name", "name")
                .kind("string")
                .description("Platform name (e.g., linux, darwin, windows)")
                .documentation("Operating system identifier (linux, darwin, windows, etc.).")
                .example("platforms:\n  - name: \"linux\""),
            S::new("platform-architectures", "architectures")
                .kind("array")
                .description("Supported architectures for this platform")
                .documentation("Supported CPU architectures for this platform.")
                .example(
                    "platforms:\n  - name: \"linux\"\n    architectures:\n      - \"amd64\"\n      - \"arm64\"",
                ),
        ])
}

fn environment() -> S {
    S::new("environment", "environment")
        .kind("array")
        .description("Environment variables used by the CLI")
        .documentation("Maps environment variables to CLI parameters for containerized deployments.")
        .example(
            r#"environment:
  - name: "OCS_CONFIG_PATH"
    description: "Override default configuration file path"
  - name: "OCS_VERBOSE"
    description: "Enable verbose output globally"
  - name: "OCS_QUIET"
    description: "Suppress non-essential output globally""#,
        )
        .children(vec![
            S::new("env-name", "name")
                .kind("string")
                .description("Environment variable name")
                .documentation("Environment variable name that your CLI tool recognizes.")
                .example("environment:\n  - name: \"OCS_CONFIG_PATH\""),
            S::new("env-description", "description")
                .kind("string")
                .description("Description of the environment variable")
                .documentation("Purpose and usage of this environment variable.")
                .example(
                    "environment:\n  - name: \"OCS_VERBOSE\"\n    description: \"Enable verbose output globally\"",
                ),
        ])
}

fn tags() -> S {
    S::new("tags", "tags")
        .kind("array")
        .description("Tags for grouping commands")
        .documentation("Logical grouping system for organizing commands by feature or domain.")
        .example(
            r#"tags:
  - name: "core"
    description: "Core commands and utilities"
  - name: "data"
    description: "Data processing commands""#,
        )
        .children(vec![
            S::new("tag-name", "name")
                .kind("string")
                .description("Tag name")
                .documentation("Unique identifier for organizing related commands.")
                .example("tags:\n  - name: \"core\""),
            S::new("tag-description", "description")
                .kind("string")
                .description("Tag description")
                .documentation("Human-readable explanation of what commands share this tag.")
                .example("tags:\n  - name: \"core\"\n    description: \"Core commands and utilities\""),
        ])
}

fn commands() -> S {
    S::new("commands", "commands")
        .required()
        .kind("object")
        .description("CLI commands and their definitions")
        .documentation("Hierarchical structure defining all available CLI commands and subcommands.")
        .example(
            r#"commands:
  /validate:
    summary: "Validate CLI specification"
    description: "Validate a CLI specification file against the OpenCLI standard"
    operationId: "validateCommand"
    aliases:
      - "val"
      - "check"
    tags:
      - "core"
    parameters:
      - name: "file"
        in: "argument"
        position: 1
        description: "Path to the CLI specification file"
        required: true
        scope: "local"
        schema:
          type: "string"
          format: "path"
    responses:
      '0':
        description: "Validation successful""#,
        )
        .children(vec![
            S::new("command-summary", "summary")
                .kind("string")
                .description("A short summary of the command")
                .documentation("One-line description shown in command help listings.")
                .example("commands:\n  ocs:\n    summary: \"Open CLI Spec tool\""),
            S::new("command-description", "description")
                .kind("string")
                .description("A detailed description of the command")
                .documentation("Detailed explanation of command purpose and behavior.")
                .example(
                    "commands:\n  ocs:\n    description: \"Main entry point for the Open CLI Specification tool\"",
                ),
            S::new("command-operationId", "operationId")
                .kind("string")
                .description("Unique identifier for the command")
                .documentation(
                    "Unique identifier for programmatic access (for testing, docs, etc.).",
                )
                .example("commands:\n  ocs:\n    operationId: \"rootCommand\""),
            S::new("command-aliases", "aliases")
                .kind("array")
                .description("Alternative names for the command")
                .documentation("Alternative command names for user convenience.")
                .example("commands:\n  ocs:\n    aliases:\n      - \"opencli\""),
            S::new("command-tags", "tags")
                .kind("array")
                .description("Tags associated with the command")
                .documentation("Categories for organizing commands in help and documentation.")
                .example("commands:\n  ocs:\n    tags:\n      - \"core\""),
            parameters(),
            responses(),
        ])
}

fn parameters() -> S {
    S::new("command-parameters", "parameters")
        .kind("array")
        .description("Command parameters, flags, and options")
        .documentation("All flags, options, and arguments this command accepts.")
        .example(
            r#"commands:
  ocs:
    parameters:
      - name: "config"
        alias:
          - "c"
        description: "Path to configuration file"
        scope: "inherited"
        schema:
          type: "string"
          format: "path""#,
        )
        .children(vec![
            S::new("parameter-name", "name")
                .kind("string")
                .description("Parameter name")
                .documentation("Unique identifier for the parameter within the command.")
                .example("parameters:\n  - name: \"config\""),
            S::new("parameter-in", "in")
                .kind("string")
                .description("Parameter location (argument, flag, option)")
                .documentation(
                    "Where the parameter appears (argument for positional, flag for boolean, option for named).",
                )
                .example("parameters:\n  - name: \"file\"\n    in: \"argument\""),
            S::new("parameter-position", "position")
                .kind("integer")
                .description("Position for positional arguments")
                .documentation("Order position for positional arguments (starting from 1).")
                .example("parameters:\n  - name: \"file\"\n    in: \"argument\"\n    position: 1"),
            S::new("parameter-alias", "alias")
                .kind("array")
                .description("Short aliases for the parameter")
                .documentation("Short form alternatives (e.g., -v for --verbose).")
                .example("parameters:\n  - name: \"verbose\"\n    alias:\n      - \"v\""),
            S::new("parameter-description", "description")
                .kind("string")
                .description("Parameter description")
                .documentation("Help text shown to users explaining the parameter purpose.")
                .example(
                    "parameters:\n  - name: \"config\"\n    description: \"Path to configuration file\"",
                ),
            S::new("parameter-required", "required")
                .kind("boolean")
                .description("Whether parameter is required")
                .documentation("Whether users must provide this parameter.")
                .example("parameters:\n  - name: \"file\"\n    required: true"),
            S::new("parameter-scope", "scope")
                .kind("string")
                .description("Parameter scope (local, inherited)")
                .documentation(
                    "Inheritance behavior - local (this command only) or inherited (available to subcommands).",
                )
                .example(
                    "parameters:\n  - name: \"config\"\n    scope: \"inherited\"\n  - name: \"file\"\n    scope: \"local\"",
                ),
            S::new("parameter-arity", "arity")
                .kind("object")
                .description("Number of values this parameter accepts")
                .documentation(
                    "How many values this parameter accepts (useful for arrays and lists).",
                )
                .example(
                    "parameters:\n  - name: \"files\"\n    arity:\n      min: 1\n      max: 10",
                ),
            S::new("parameter-schema", "schema")
                .kind("object")
                .description("Parameter value schema")
                .documentation("Data type, validation rules, and constraints for parameter values.")
                .example(
                    "parameters:\n  - name: \"language\"\n    schema:\n      type: \"string\"\n      enum:\n        - \"go\"\n        - \"python\"\n      example: \"go\"",
                )
                .children(vec![
                    S::new("schema-type", "type")
                        .kind("string")
                        .description("Data type (string, integer, boolean, etc.)")
                        .documentation(
                            "Data type for validation (string, integer, boolean, array, object).",
                        )
                        .example("schema:\n  type: \"string\""),
                    S::new("schema-format", "format")
                        .kind("string")
                        .description("Format hint (path, email, uri, etc.)")
                        .documentation(
                            "Format hint for specialized string types (path, email, uri, date).",
                        )
                        .example("schema:\n  type: \"string\"\n  format: \"path\""),
                    S::new("schema-enum", "enum")
                        .kind("array")
                        .description("List of allowed values")
                        .documentation("Restricted list of allowed values for this parameter.")
                        .example(
                            "schema:\n  type: \"string\"\n  enum:\n    - \"json\"\n    - \"yaml\"\n    - \"text\"",
                        ),
                    S::new("schema-default", "default")
                        .kind("any")
                        .description("Default value if not provided")
                        .documentation("Value used when parameter is not provided by the user.")
                        .example("schema:\n  type: \"boolean\"\n  default: false"),
                    S::new("schema-example", "example")
                        .kind("any")
                        .description("Example value for documentation")
                        .documentation("Sample value shown in help text and documentation.")
                        .example(
                            "schema:\n  type: \"string\"\n  format: \"path\"\n  example: \"~/.config/ocs/config.yaml\"",
                        ),
                ]),
        ])
}

fn responses() -> S {
    S::new("command-responses", "responses")
        .kind("object")
        .description("Expected command outputs and exit codes")
        .documentation("Exit codes and output formats users can expect.")
        .example(
            r#"commands:
  /validate:
    responses:
      '0':
        description: "Validation successful"
      '1':
        description: "Validation failed""#,
        )
        .children(vec![
            S::new("response-description", "description")
                .kind("string")
                .description("Response description")
                .documentation("Human-readable explanation of when this response occurs.")
                .example("responses:\n  '0':\n    description: \"Validation successful\""),
            S::new("response-content", "content")
                .kind("object")
                .description("Response content by media type")
                .documentation(
                    "Output format examples by media type (text/plain, application/json, etc.).",
                )
                .example(
                    "responses:\n  '0':\n    content:\n      text/plain:\n        example: \"Validation successful\"",
                ),
        ])
}

fn components() -> S {
    S::new("components", "components")
        .kind("object")
        .description("Reusable components for the specification")
        .documentation("Reusable schemas for parameters, responses, and data validation.")
        .children(vec![
            S::new("components-schemas", "schemas")
                .kind("object")
                .description("Reusable data schemas")
                .example(
                    r#"schemas:
  Error:
    type: "object"
    required: ["code", "message"]
    properties:
      code:
        type: "integer"
        format: "int32"
      message:
        type: "string""#,
                ),
            S::new("components-parameters", "parameters")
                .kind("object")
                .description("Reusable parameter definitions")
                .example(
                    r#"parameters:
  OutputFormat:
    name: "output"
    alias: ["o"]
    description: "Output format for results"
    schema:
      type: "string"
      enum: ["json", "yaml", "text"]
      default: "text""#,
                ),
            S::new("components-responses", "responses")
                .kind("object")
                .description("Reusable response definitions")
                .example(
                    r##"responses:
  FileNotFound:
    description: "File not found or not readable"
    content:
      application/json:
        schema:
          $ref: "#/components/schemas/Error""##,
                ),
        ])
}
