use std::collections::HashMap;
use std::time::Duration;

use time::OffsetDateTime;

use google_cloud_gax::status::Code;

pub mod run;

/// Specifies a series of actions to execute, expressed as Docker containers.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    /// The list of actions to execute, in the order they are specified.
    #[serde(default)]
    pub actions: Vec<Action>,
    /// The resources required for execution.
    pub resources: Option<Resources>,
    /// The environment to pass into every action. Each action can also specify additional environment variables but cannot delete an entry from this map (though they can overwrite it with a different value).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub environment: HashMap<String, String>,
    /// The encrypted environment to pass into every action. Each action can also specify its own encrypted environment.
    /// The secret must decrypt to a JSON-encoded dictionary where key-value pairs serve as environment variable names and their values.
    pub encrypted_environment: Option<Secret>,
    /// The maximum amount of time to give the pipeline to complete.
    /// This includes the time spent waiting for a worker to be allocated.
    /// If the pipeline fails to complete before the timeout, it will be cancelled and the error code will be set to DEADLINE_EXCEEDED.
    /// If unspecified, it will default to 7 days.
    #[serde(default, with = "google_cloud_gax::conversion::duration::option")]
    pub timeout: Option<Duration>,
}

/// Specifies a single action that runs a Docker container.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    /// An optional name for the container. The container hostname will be set to this name, making it useful for inter-container communication.
    /// The name must contain only upper and lowercase alphanumeric characters and hyphens and cannot start with a hyphen.
    pub container_name: Option<String>,
    /// Required. The URI to pull the container image from.
    /// Note that all images referenced by actions in the pipeline are pulled before the first action runs.
    /// If multiple actions reference the same image, it is only pulled once, ensuring that the same image is used for all actions in a single pipeline.
    #[serde(default)]
    pub image_uri: String,
    /// If specified, overrides the `CMD` specified in the container.
    /// If the container also has an `ENTRYPOINT` the values are used as entrypoint arguments.
    /// Otherwise, they are used as a command and arguments to run inside the container.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub commands: Vec<String>,
    /// If specified, overrides the `ENTRYPOINT` specified in the container.
    pub entrypoint: Option<String>,
    /// The environment to pass into the container. This environment is merged with values specified in the google.cloud.lifesciences.v2beta.Pipeline message, overwriting any duplicate values.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub environment: HashMap<String, String>,
    /// The encrypted environment to pass into the container.
    /// This environment is merged with values specified in the google.cloud.lifesciences.v2beta.Pipeline message, overwriting any duplicate values.
    pub encrypted_environment: Option<Secret>,
    /// An optional identifier for a PID namespace to run the action inside.
    /// Multiple actions should use the same string to share a namespace.
    /// If unspecified, a separate isolated namespace is used.
    pub pid_namespace: Option<String>,
    /// A map of containers to host port mappings for this container.
    /// If the container already specifies exposed ports, use the `PUBLISH_EXPOSED_PORTS` flag instead.
    /// The host port number must be less than 65536.
    /// If it is zero, an unused random port is assigned.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub port_mappings: HashMap<String, i32>,
    /// A list of mounts to make available to the action.
    /// In addition to the values specified here, every action has a special virtual disk mounted under `/google` that contains log files and other operational components.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mounts: Vec<Mount>,
    /// Labels to associate with the action.
    /// This field is provided to assist workflow engine authors in identifying actions (for example, to indicate what sort of action they perform, such as localization or debugging).
    /// They are returned in the operation metadata, but are otherwise ignored.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    /// If the specified image is hosted on a private registry other than Google Container Registry, the credentials required to pull the image must be specified here as an encrypted secret.
    /// The secret must decrypt to a JSON-encoded dictionary containing both `username` and `password` keys.
    pub credentials: Option<Secret>,
    /// The maximum amount of time to give the action to complete.
    /// If the action fails to complete before the timeout, it will be terminated and the exit status will be non-zero.
    /// The pipeline will continue or terminate based on the rules defined by the `ALWAYS_RUN` and `IGNORE_EXIT_STATUS` flags.
    #[serde(default, with = "google_cloud_gax::conversion::duration::option")]
    pub timeout: Option<Duration>,
    /// Normally, a non-zero exit status causes the pipeline to fail. This flag allows execution of other actions to continue instead.
    pub ignore_exit_status: Option<bool>,
    /// This flag allows an action to continue running in the background while executing subsequent actions.
    /// This is useful to provide services to other actions (or to provide debugging support tools like SSH servers).
    pub run_in_background: Option<bool>,
    /// By default, after an action fails, no further actions are run.
    /// This flag indicates that this action must be run even if the pipeline has already failed.
    /// This is useful for actions that copy output files off of the VM or for debugging.
    /// Note that no actions will be run if image prefetching fails.
    pub always_run: Option<bool>,
    /// Enable access to the FUSE device for this action.
    /// Filesystems can then be mounted into disks shared with other actions using the standard mount system call.
    /// This gives the container full `CAP_SYS_ADMIN` privileges on the host machine, which are required to mount FUSE filesystems.
    pub enable_fuse: Option<bool>,
    /// Exposes all ports specified by `EXPOSE` statements in the container.
    /// To discover the host side port numbers, consult the `ACTION_STARTED` event in the operation metadata.
    pub publish_exposed_ports: Option<bool>,
    /// All container images are typically downloaded before any actions are executed.
    /// This helps prevent typos in URIs or issues like lack of disk space from wasting large amounts of compute resources.
    /// If set, this action will force the image to be downloaded during execution of the action.
    pub disable_image_prefetch: Option<bool>,
    /// A small portion of the container's standard error stream is typically captured and returned inside the `ContainerStoppedEvent`.
    /// Setting this flag disables this functionality.
    pub disable_standard_error_capture: Option<bool>,
    /// Prevents the container from accessing the external network.
    pub block_external_network: Option<bool>,
}

/// Holds encrypted information that is only decrypted and stored in RAM by the worker VM when running the pipeline.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    /// The name of the Cloud KMS key that will be used to decrypt the secret value.
    /// The VM service account must have the required permissions and authentication scopes to invoke the `decrypt` method on the specified key.
    pub key_name: Option<String>,
    /// The value of the cipherText response from the `encrypt` method. This field is intentionally unaudited.
    pub cipher_text: Option<String>,
}

/// Carries information about a particular disk mount inside a container.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Mount {
    /// The name of the disk to mount, as specified in the resources section.
    pub disk: Option<String>,
    /// The path to mount the disk inside the container.
    pub path: Option<String>,
    /// If true, the disk is mounted read-only inside the container.
    pub read_only: Option<bool>,
}

/// The system resources for the pipeline run.
/// At least one zone or region must be specified or the pipeline run will fail.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Resources {
    /// The list of regions allowed for VM allocation. If set, the `zones` field must not be set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<String>,
    /// The list of zones allowed for VM allocation. If set, the `regions` field must not be set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zones: Vec<String>,
    /// The virtual machine specification.
    pub virtual_machine: Option<VirtualMachine>,
}

/// Carries information about a Compute Engine VM resource.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachine {
    /// Required. The machine type of the virtual machine to create.
    /// Must be the short name of a standard machine type (such as "n1-standard-1") or a custom machine type (such as "custom-1-4096", where "1" indicates the number of vCPUs and "4096" indicates the memory in MB).
    #[serde(default)]
    pub machine_type: String,
    /// If true, allocate a preemptible VM.
    pub preemptible: Option<bool>,
    /// Optional set of labels to apply to the VM and any attached disk resources.
    /// These labels must adhere to the [name and value restrictions](https://cloud.google.com/compute/docs/labeling-resources) on VM labels imposed by Compute Engine.
    /// Labels keys with the prefix 'google-' are reserved for use by Google.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    /// The list of disks to create and attach to the VM. Specify either the `volumes[]` field or the `disks[]` field, but not both.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disks: Vec<Disk>,
    /// The VM network configuration.
    pub network: Option<Network>,
    /// The list of accelerators to attach to the VM.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accelerators: Vec<Accelerator>,
    /// The service account to install on the VM. This account does not need any permissions other than those required by the pipeline.
    pub service_account: Option<ServiceAccount>,
    /// The size of the boot disk, in GB. The boot disk must be large enough to accommodate all of the Docker images from each action in the pipeline at the same time.
    /// If not specified, a small but reasonable default value is used.
    pub boot_disk_size_gb: Option<i32>,
    /// The CPU platform to request. An instance based on a newer platform can be allocated, but never one with fewer capabilities.
    /// The value of this parameter must be a valid Compute Engine CPU platform name (such as "Intel Skylake").
    pub cpu_platform: Option<String>,
    /// The host operating system image to use.
    /// Currently, only Container-Optimized OS images can be used.
    /// The default value is `projects/cos-cloud/global/images/family/cos-stable`, which selects the latest stable release of Container-Optimized OS.
    pub boot_image: Option<String>,
    /// The NVIDIA driver version to use when attaching an NVIDIA GPU accelerator.
    /// The version specified here must be compatible with the GPU libraries contained in the container being executed, and must be one of the drivers hosted in the `nvidia-drivers-us-public` bucket on Google Cloud Storage.
    pub nvidia_driver_version: Option<String>,
    /// Whether Stackdriver monitoring should be enabled on the VM.
    pub enable_stackdriver_monitoring: Option<bool>,
    /// The Compute Engine Disk Images to use as a Docker cache.
    /// The disks will be mounted into the Docker folder in a way that the images present in the cache will not need to be pulled.
    /// The digests of the cached images must match those of the tags used or the latest version will still be pulled.
    /// The root directory of the ext4 image must contain `image` and `overlay2` directories copied from the Docker directory of a VM where the desired Docker images have already been pulled.
    /// Any images pulled that are not cached will be stored on the first cache disk instead of the boot disk.
    /// Only a single image is supported.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub docker_cache_images: Vec<String>,
    /// The list of disks and other storage to create or attach to the VM.
    /// Specify either the `volumes[]` field or the `disks[]` field, but not both.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<Volume>,
    /// If specified, the VM will only be allocated inside the matching reservation.
    /// It will fail if the VM parameters don't match the reservation.
    pub reservation: Option<String>,
}

/// Carries information about a disk that can be attached to a VM.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Disk {
    /// A user-supplied name for the disk. Used when mounting the disk into actions.
    /// The name must contain only upper and lowercase alphanumeric characters and hyphens and cannot start with a hyphen.
    #[serde(default)]
    pub name: String,
    /// The size, in GB, of the disk to attach. If the size is not specified, a default is chosen to ensure reasonable I/O performance.
    /// If the disk type is specified as `local-ssd`, multiple local drives are automatically combined to provide the requested size.
    /// Note, however, that each physical SSD is 375GB in size, and no more than 8 drives can be attached to a single instance.
    pub size_gb: Option<i32>,
    /// The Compute Engine disk type. If unspecified, `pd-standard` is used.
    #[serde(rename = "type")]
    pub disk_type: Option<String>,
    /// An optional image to put on the disk before attaching it to the VM.
    pub source_image: Option<String>,
}

/// Carries information about storage that can be attached to a VM.
/// Specify either `Volume` or `Disk`, but not both.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    /// A user-supplied name for the volume. Used when mounting the volume into `Actions`.
    /// The name must contain only upper and lowercase alphanumeric characters and hyphens and cannot start with a hyphen.
    #[serde(default)]
    pub volume: String,
    /// Configuration for a persistent disk.
    pub persistent_disk: Option<PersistentDisk>,
    /// Configuration for a existing disk.
    pub existing_disk: Option<ExistingDisk>,
    /// Configuration for an NFS mount.
    pub nfs_mount: Option<NfsMount>,
}

/// Configuration for a persistent disk to be attached to the VM.
/// See https://cloud.google.com/compute/docs/disks/performance for more information about disk type, size, and performance considerations.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PersistentDisk {
    /// The size, in GB, of the disk to attach. If the size is not specified, a default is chosen to ensure reasonable I/O performance.
    pub size_gb: Option<i32>,
    /// The Compute Engine disk type. If unspecified, `pd-standard` is used.
    #[serde(rename = "type")]
    pub disk_type: Option<String>,
    /// An image to put on the disk before attaching it to the VM.
    pub source_image: Option<String>,
}

/// Configuration for an existing disk to be attached to the VM.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExistingDisk {
    /// If `disk` contains slashes, the Cloud Life Sciences API assumes that it is a complete URL for the disk.
    /// If `disk` does not contain slashes, the Cloud Life Sciences API assumes that the disk is a zonal disk and a URL will be generated of the form `zones//disks/`, where `` is the zone in which the instance is allocated.
    /// The disk must be ext4 formatted.
    #[serde(default)]
    pub disk: String,
}

/// Configuration for an `NFSMount` to be attached to the VM.
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NfsMount {
    /// A target NFS mount. The target must be specified as `address:/mount".
    #[serde(default)]
    pub target: String,
}

/// VM networking options.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// The network name to attach the VM's network interface to.
    /// The value will be prefixed with `global/networks/` unless it contains a `/`, in which case it is assumed to be a fully specified network resource URL.
    /// If unspecified, the global default network is used.
    pub network: Option<String>,
    /// If set to true, do not attach a public IP address to the VM.
    /// Note that without a public IP address, additional configuration is required to allow the VM to access Google services.
    pub use_private_address: Option<bool>,
    /// If the specified network is configured for custom subnet creation, the name of the subnetwork to attach the instance to must be specified here.
    /// The value is prefixed with `regions/*/subnetworks/` unless it contains a `/`, in which case it is assumed to be a fully specified subnetwork resource URL.
    /// If the `*` character appears in the value, it is replaced with the region that the virtual machine has been allocated in.
    pub subnetwork: Option<String>,
}

/// Carries information about an accelerator that can be attached to a VM.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Accelerator {
    /// The accelerator type string (for example, "nvidia-tesla-k80").
    /// Only NVIDIA GPU accelerators are currently supported.
    #[serde(rename = "type")]
    pub accelerator_type: Option<String>,
    /// How many accelerators of this type to attach.
    #[serde(default, with = "google_cloud_gax::conversion::string::option")]
    pub count: Option<i64>,
}

/// Carries information about a Google Cloud service account.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccount {
    /// Email address of the service account. If not specified, the default Compute Engine service account for the project will be used.
    pub email: Option<String>,
    /// List of scopes to be enabled for this service account on the VM, in addition to the cloud-platform API scope that will be added by default.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

/// Carries information about the pipeline execution that is returned in the long running operation's metadata field.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// The pipeline this operation represents.
    pub pipeline: Option<Pipeline>,
    /// The user-defined labels associated with this operation.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
    /// The list of events that have happened so far during the execution of this operation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
    /// The time at which the operation was created by the API.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub create_time: Option<OffsetDateTime>,
    /// The first time at which resources were allocated to execute the pipeline.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_time: Option<OffsetDateTime>,
    /// The time at which execution was completed and resources were cleaned up.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_time: Option<OffsetDateTime>,
    /// The name of the Cloud Pub/Sub topic where notifications of operation status changes are sent.
    pub pub_sub_topic: Option<String>,
}

/// Carries information about events that occur during pipeline execution.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// The time at which the event occurred.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,
    /// A human-readable description of the event.
    /// Note that these strings can change at any time without notice.
    /// Any application logic must use the information in the `details` field.
    pub description: Option<String>,
    /// See google.cloud.lifesciences.v2beta.DelayedEvent.
    pub delayed: Option<DelayedEvent>,
    /// See google.cloud.lifesciences.v2beta.WorkerAssignedEvent.
    pub worker_assigned: Option<WorkerAssignedEvent>,
    /// See google.cloud.lifesciences.v2beta.WorkerReleasedEvent.
    pub worker_released: Option<WorkerReleasedEvent>,
    /// See google.cloud.lifesciences.v2beta.PullStartedEvent.
    pub pull_started: Option<PullStartedEvent>,
    /// See google.cloud.lifesciences.v2beta.PullStoppedEvent.
    pub pull_stopped: Option<PullStoppedEvent>,
    /// See google.cloud.lifesciences.v2beta.ContainerStartedEvent.
    pub container_started: Option<ContainerStartedEvent>,
    /// See google.cloud.lifesciences.v2beta.ContainerStoppedEvent.
    pub container_stopped: Option<ContainerStoppedEvent>,
    /// See google.cloud.lifesciences.v2beta.ContainerKilledEvent.
    pub container_killed: Option<ContainerKilledEvent>,
    /// See google.cloud.lifesciences.v2beta.UnexpectedExitStatusEvent.
    pub unexpected_exit_status: Option<UnexpectedExitStatusEvent>,
    /// See google.cloud.lifesciences.v2beta.FailedEvent.
    pub failed: Option<FailedEvent>,
}

/// An event generated whenever a resource limitation or transient error delays execution of a pipeline that was otherwise ready to run.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DelayedEvent {
    /// A textual description of the cause of the delay.
    /// The string can change without notice because it is often generated by another service (such as Compute Engine).
    pub cause: Option<String>,
    /// If the delay was caused by a resource shortage, this field lists the Compute Engine metrics that are preventing this operation from running (for example, `CPUS` or `INSTANCES`).
    /// If the particular metric is not known, a single `UNKNOWN` metric will be present.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<String>,
}

/// An event generated after a worker VM has been assigned to run the pipeline.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkerAssignedEvent {
    /// The zone the worker is running in.
    pub zone: Option<String>,
    /// The worker's instance name.
    pub instance: Option<String>,
    /// The machine type that was assigned for the worker.
    pub machine_type: Option<String>,
}

/// An event generated when the worker VM that was assigned to the pipeline has been released (deleted).
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkerReleasedEvent {
    /// The zone the worker was running in.
    pub zone: Option<String>,
    /// The worker's instance name.
    pub instance: Option<String>,
}

/// An event generated when the worker starts pulling an image.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PullStartedEvent {
    /// The URI of the image that was pulled.
    pub image_uri: Option<String>,
}

/// An event generated when the worker stops pulling an image.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PullStoppedEvent {
    /// The URI of the image that was pulled.
    pub image_uri: Option<String>,
}

/// An event generated when a container starts.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStartedEvent {
    /// The numeric ID of the action that started this container.
    pub action_id: Option<i32>,
    /// The container-to-host port mappings installed for this container.
    /// This set will contain any ports exposed using the `PUBLISH_EXPOSED_PORTS` flag as well as any specified in the `Action` definition.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub port_mappings: HashMap<String, i32>,
    /// The public IP address that can be used to connect to the container.
    /// This field is only populated when at least one port mapping is present.
    /// If the instance was created with a private address, this field will be empty even if port mappings exist.
    pub ip_address: Option<String>,
}

/// An event generated when a container exits.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStoppedEvent {
    /// The numeric ID of the action that started this container.
    pub action_id: Option<i32>,
    /// The exit status of the container.
    pub exit_status: Option<i32>,
    /// The tail end of any content written to standard error by the container.
    /// If the content emits large amounts of debugging noise or contains sensitive information, you can prevent the content from being printed by setting the `DISABLE_STANDARD_ERROR_CAPTURE` flag.
    /// Note that only a small amount of the end of the stream is captured here.
    /// The entire stream is stored in the `/google/logs` directory mounted into each action, and can be copied off the machine as described elsewhere.
    pub stderr: Option<String>,
}

/// An event generated when a container is forcibly terminated by the worker.
/// Currently, this only occurs when the container outlives the timeout specified by the user.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContainerKilledEvent {
    /// The numeric ID of the action that started the container.
    pub action_id: Option<i32>,
}

/// An event generated when the execution of a container results in a non-zero exit status that was not otherwise ignored.
/// Execution will continue, but only actions that are flagged as `ALWAYS_RUN` will be executed.
/// Other actions will be skipped.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct UnexpectedExitStatusEvent {
    /// The numeric ID of the action that started the container.
    pub action_id: Option<i32>,
    /// The exit status of the container.
    pub exit_status: Option<i32>,
}

/// An event generated when the execution of a pipeline has failed.
/// Note that other events can continue to occur after this event.
#[serde_with::skip_serializing_none]
#[derive(Clone, PartialEq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct FailedEvent {
    /// The Google standard error code that best describes this failure.
    pub code: Option<Code>,
    /// The human-readable description of the cause of the failure.
    pub cause: Option<String>,
}
